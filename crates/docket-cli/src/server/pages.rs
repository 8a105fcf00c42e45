//! Page rendering sink.
//!
//! Handlers build a [`Page`] and hand it to the configured
//! [`PageRenderer`]. The bundled [`MarkdownRenderer`] writes the markdown
//! views from `docket_core::display`; an HTML templating renderer can be
//! swapped in without touching the handlers.

use std::fmt;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use docket_core::{CreatePage, EditPage, ErrorPage, IndexPage};

/// A page ready to be rendered.
pub enum Page<'a> {
    Index(IndexPage<'a>),
    Create(CreatePage<'a>),
    Edit(EditPage<'a>),
    Error(ErrorPage<'a>),
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(page) => fmt::Display::fmt(page, f),
            Self::Create(page) => fmt::Display::fmt(page, f),
            Self::Edit(page) => fmt::Display::fmt(page, f),
            Self::Error(page) => fmt::Display::fmt(page, f),
        }
    }
}

/// Turns pages into HTTP responses.
pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &Page<'_>) -> Response;
}

/// Renders pages as `text/markdown`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl PageRenderer for MarkdownRenderer {
    fn render(&self, page: &Page<'_>) -> Response {
        (
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            page.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_markdown_renderer_sets_content_type() {
        let flashes = vec!["Oops".to_string()];
        let response = MarkdownRenderer.render(&Page::Error(ErrorPage { flashes: &flashes }));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );
    }
}
