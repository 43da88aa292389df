//! Interactive Page Core Library
//!
//! Behavior layer of a single interactive page, independent of how the page
//! is drawn:
//! - Theme toggle (light/dark, label names the next action)
//! - Tabs (exactly one active after the first click)
//! - Accordion (at most one open section)
//! - Registration form validation and local submission
//!
//! A front end owns one [`PageState`], forwards clicks, text changes and
//! submits to it, and renders whatever state it exposes.

pub mod accordion;
pub mod error;
pub mod markup;
pub mod notice;
pub mod page;
pub mod submission;
pub mod tabs;
pub mod theme;
pub mod validation;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use markup::PageMarkup;
pub use page::PageState;
pub use submission::SubmissionOutcome;
pub use theme::ThemeState;
