//! Terminal front end for the portfolio page, built on ratatui.

pub mod page_view;

pub use page_view::{PageView, run_page_view};
