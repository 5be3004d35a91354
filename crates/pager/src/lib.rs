//! Pagination controller for the episodes page.
//!
//! [`PaginationController`] owns the page number, issues one fetch per page change as a
//! [`FetchRequest`], drops completions of superseded fetches, and renders the page for
//! the current [`QueryState`].

#![warn(missing_docs)]

mod controller;
mod page;
mod ticket;

pub use controller::{PaginationController, QueryState, Resolution};
pub use page::{FOOTER, LOADING, SUBTITLE, TITLE};
pub use ticket::{FetchRequest, FetchTicket};
