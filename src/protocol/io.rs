//! Reading and parsing plugin requests.

use std::io::Read;

use tracing::{debug, warn};

use super::message::{PluginRequest, PROTOCOL_VERSION};
use crate::error::{KbdPluginError, Result};

/// Maximum length for raw JSON in logs (documents can be large)
const MAX_RAW_LOG_PREVIEW: usize = 200;

/// Get a truncated preview of raw input for logging, cut on a char boundary.
pub fn log_preview(raw: &str) -> (&str, usize) {
    let len = raw.len();
    match raw.char_indices().nth(MAX_RAW_LOG_PREVIEW) {
        Some((cut, _)) => (&raw[..cut], len),
        None => (raw, len),
    }
}

/// Parse a request from its JSON text.
///
/// Only malformed JSON is an error. A missing `text` field yields an empty
/// document and an unexpected `version` is logged and tolerated.
pub fn parse_request(raw: &str) -> Result<PluginRequest> {
    let request: PluginRequest = serde_json::from_str(raw).map_err(|e| {
        let (preview, raw_len) = log_preview(raw);
        warn!(
            error = %e,
            raw_preview = %preview,
            raw_len = raw_len,
            "Failed to parse plugin request"
        );
        KbdPluginError::Payload(e)
    })?;

    if request.version != PROTOCOL_VERSION {
        warn!(
            version = request.version,
            expected = PROTOCOL_VERSION,
            "Unexpected protocol version, continuing"
        );
    }
    if request.text.is_none() {
        warn!(plugin_id = %request.plugin_id, "Request has no text field, treating as empty");
    }

    debug!(
        plugin_id = %request.plugin_id,
        phase = ?request.phase,
        text_len = request.text().len(),
        "Parsed plugin request"
    );
    Ok(request)
}

/// Read the whole stream, then parse it as one request.
pub fn read_request<R: Read>(mut reader: R) -> Result<PluginRequest> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_request(raw.trim())
}
