//! Route trees merged by [`build_app_router`](crate::router::build_app_router).
//!
//! ```text
//! GET  /health                 service health (JSON)
//! GET  <every RouteTable path> rendered page (HTML)
//! POST /submit-quote           quote request
//! POST /api/contact            quote request (AJAX alias)
//! POST /submit-contact         general contact message
//! GET  /static/*               site assets
//! ```

pub mod forms;
pub mod health;
pub mod pages;
