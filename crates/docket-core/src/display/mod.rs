//! Markdown views of the tracker's pages.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! page wrappers in [`pages`] compose them with flash messages into complete
//! documents. Presentation layers treat a page as an opaque value and decide
//! how to render it.
//!
//! ```rust
//! use docket_core::{display::IndexPage, models::ListGroups};
//!
//! let groups = ListGroups::default();
//! let flashes = vec!["Task marked as done!".to_string()];
//! let page = IndexPage::new(&groups, &flashes);
//! let output = page.to_string();
//! assert!(output.contains("> Task marked as done!"));
//! ```

pub mod flash;
pub mod models;
pub mod pages;

pub use flash::FlashMessages;
pub use pages::{CreatePage, EditPage, ErrorPage, IndexPage};
