//! Presentational components shared by the dashboard pages.
//!
//! Components carry their own stylesheet via `document::Link` so a page only
//! pulls in the CSS for what it renders.

pub mod components;

pub use components::*;
