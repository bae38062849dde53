//! Host plugin protocol.
//!
//! The markdown host runs the plugin once per document and writes a single
//! JSON request to its stdin:
//!
//! ```json
//! { "version": 1, "plugin_id": "env-pre-parse", "phase": "pre_parse", "text": "..." }
//! ```
//!
//! The plugin answers with the transformed text on stdout, not JSON.
//!
//! # Module Structure
//!
//! - `message`: the request payload and plugin phases
//! - `io`: reading and parsing a request, log previews

mod io;
mod message;

pub use io::*;
pub use message::*;
