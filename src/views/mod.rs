//! Page views.
//!
//! Each declared route dispatches to one [`View`]. A view checks the request
//! method, then renders its page shell with navigation links built through
//! reverse lookup on the route table it was dispatched from.

pub mod pages;

use axum::http::{header, Method};
use axum::response::{Html, IntoResponse, Response};

use crate::http::response::AppError;
use crate::routing::{PathParams, RouteTable};

pub use pages::{Page, NAV_LINKS};

/// Handler reference stored in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Index,
    Login,
    Register,
    OrganizerDashboard,
    CreateEvent,
    MyEvent,
}

/// Everything a view sees of the request.
#[derive(Debug)]
pub struct PageContext<'a> {
    pub routes: &'a RouteTable<View>,
    pub method: &'a Method,
    pub params: &'a PathParams,
    pub request_id: &'a str,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Index,
        View::Login,
        View::Register,
        View::OrganizerDashboard,
        View::CreateEvent,
        View::MyEvent,
    ];

    /// Identifier of the view, as used in logs and listings.
    pub fn as_str(self) -> &'static str {
        match self {
            View::Index => "index",
            View::Login => "login",
            View::Register => "register",
            View::OrganizerDashboard => "organizer_dashboard",
            View::CreateEvent => "create_event",
            View::MyEvent => "my_event",
        }
    }

    /// Value of the `Allow` header for this view.
    pub fn allow_header(self) -> &'static str {
        "GET, HEAD"
    }

    pub fn allows(self, method: &Method) -> bool {
        *method == Method::GET || *method == Method::HEAD
    }

    pub fn page(self) -> Page {
        pages::page_for(self)
    }

    /// Handle a dispatched request.
    pub fn render(self, ctx: &PageContext<'_>) -> Result<Response, AppError> {
        if !self.allows(ctx.method) {
            return Err(AppError::MethodNotAllowed {
                allow: self.allow_header(),
            });
        }

        let body = self.page().render(ctx.routes).map_err(|e| {
            AppError::internal(format!("view '{}' failed to build a link: {}", self.as_str(), e))
        })?;

        tracing::debug!(
            request_id = %ctx.request_id,
            view = self.as_str(),
            params = ctx.params.len(),
            "Rendered page"
        );

        Ok((
            [(header::CACHE_CONTROL, "no-cache")],
            Html(body),
        )
            .into_response())
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::urls::build_route_table;
    use axum::http::StatusCode;

    fn ctx<'a>(routes: &'a RouteTable<View>, method: &'a Method, params: &'a PathParams) -> PageContext<'a> {
        PageContext {
            routes,
            method,
            params,
            request_id: "test",
        }
    }

    #[test]
    fn test_get_renders_html() {
        let routes = build_route_table().unwrap();
        let params = PathParams::default();
        let response = View::Login.render(&ctx(&routes, &Method::GET, &params)).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[test]
    fn test_post_is_rejected() {
        let routes = build_route_table().unwrap();
        let params = PathParams::default();
        let err = View::CreateEvent
            .render(&ctx(&routes, &Method::POST, &params))
            .unwrap_err();
        assert!(matches!(err, AppError::MethodNotAllowed { .. }));
    }

    #[test]
    fn test_missing_link_target_is_internal_error() {
        // A table without the navigation targets cannot render links.
        let routes = RouteTable::new(vec![crate::routing::path("", View::Index, "index")]).unwrap();
        let params = PathParams::default();
        let err = View::Index
            .render(&ctx(&routes, &Method::GET, &params))
            .unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
