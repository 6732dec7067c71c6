//! Business-letter reply drafting: a form controller, its terminal front end
//! and the `POST /api/generate` service behind it.

pub mod client;
pub mod clipboard;
pub mod config;
pub mod draft;
pub mod logging;
pub mod protocol;
pub mod server;
pub mod ui;
