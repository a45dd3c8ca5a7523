//! Zealous Solutions site core.
//!
//! Pure logic shared by the live server and the static exporter: the route
//! table, form validation, notification composition and the export path
//! rewriter. Nothing in this crate performs I/O.

pub mod compose;
pub mod error;
pub mod forms;
pub mod rewrite;
pub mod routes;
