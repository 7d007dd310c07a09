//! URL configuration for the Eventora site.

use crate::routing::{path, InvalidRouteTable, Route, RouteTable};
use crate::views::View;

/// Declared routes, in match order.
pub fn urlpatterns() -> Vec<Route<View>> {
    vec![
        path("", View::Index, "index"),
        path("login", View::Login, "login"),
        path("register", View::Register, "register"),
        path("organizer_dashboard", View::OrganizerDashboard, "organizer_dashboard"),
        path("create_event", View::CreateEvent, "create_event"),
        path("my_event", View::MyEvent, "my_event"),
    ]
}

/// Compile the declared routes into the site's route table.
pub fn build_route_table() -> Result<RouteTable<View>, InvalidRouteTable> {
    RouteTable::new(urlpatterns())
}
