//! Data models for lists and items.
//!
//! Display implementations live in [`crate::display`] so the models stay
//! plain data.

pub mod groups;
pub mod item;
pub mod list;

#[cfg(test)]
mod tests;

pub use groups::{ListGroup, ListGroups};
pub use item::{Item, ItemWithList};
pub use list::TodoList;
