//! kbd-plugin - renders `{% kbd ... %}` keyboard shortcut notation as HTML
//!
//! This library provides the combo renderer and the plugin plumbing for a
//! markdown host that runs text-based pre-parse plugins over stdin/stdout.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod shortcuts;
pub mod transform;

pub use shortcuts::{render_markup, RenderOptions};
pub use transform::{process_request, transform_document};
