//! Application shell for the episode browser.
//!
//! [`App`] composes the error boundary around the episodes page, executes the page's
//! fetches through a [`PageLoader`], and routes completions back into the controller.

#![warn(missing_docs)]

mod loader;
mod shell;

pub use loader::{Completion, PageLoader};
pub use shell::{App, AppOptions};
