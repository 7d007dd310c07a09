//! Page shells for each view.

use crate::routing::{ReverseError, RouteTable};
use crate::views::View;

/// Navigation bar entries: route name and label.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("index", "Discover"),
    ("my_event", "My events"),
    ("organizer_dashboard", "Dashboard"),
    ("create_event", "Create event"),
    ("login", "Sign in"),
    ("register", "Sign up"),
];

/// Static description of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub heading: &'static str,
    pub lead: &'static str,
    /// Client script under `/static/js/`.
    pub script: &'static str,
}

pub(crate) fn page_for(view: View) -> Page {
    match view {
        View::Index => Page {
            title: "Eventora",
            heading: "Discover events near you",
            lead: "Browse upcoming events and save the ones you like.",
            script: "index.js",
        },
        View::Login => Page {
            title: "Sign in | Eventora",
            heading: "Welcome back",
            lead: "Sign in to manage your tickets and events.",
            script: "auth.js",
        },
        View::Register => Page {
            title: "Sign up | Eventora",
            heading: "Create your account",
            lead: "Join Eventora to attend and organize events.",
            script: "auth.js",
        },
        View::OrganizerDashboard => Page {
            title: "Dashboard | Eventora",
            heading: "Organizer dashboard",
            lead: "Track ticket sales, attendees and revenue.",
            script: "organizer_dashboard.js",
        },
        View::CreateEvent => Page {
            title: "Create event | Eventora",
            heading: "Create a new event",
            lead: "Basic info, date and location, tickets, then review and publish.",
            script: "create-event.js",
        },
        View::MyEvent => Page {
            title: "My events | Eventora",
            heading: "My events",
            lead: "Events you are attending or have saved.",
            script: "my-events.js",
        },
    }
}

impl Page {
    /// Render the HTML shell. Navigation links are resolved by name.
    pub fn render<H>(&self, routes: &RouteTable<H>) -> Result<String, ReverseError> {
        let nav = NAV_LINKS
            .iter()
            .map(|(name, label)| {
                routes
                    .url_for(name, &[])
                    .map(|href| format!(r#"<a href="{}">{}</a>"#, href, label))
            })
            .collect::<Result<String, _>>()?;

        Ok(format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
                "<title>{title}</title>\n",
                "</head>\n",
                "<body>\n",
                "<nav>{nav}</nav>\n",
                "<main>\n<h1>{heading}</h1>\n<p>{lead}</p>\n</main>\n",
                "<script src=\"/static/js/{script}\"></script>\n",
                "</body>\n",
                "</html>\n",
            ),
            title = self.title,
            nav = nav,
            heading = self.heading,
            lead = self.lead,
            script = self.script,
        ))
    }
}
