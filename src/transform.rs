//! Document-level substitution of `{% kbd ... %}` spans.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::protocol::PluginRequest;
use crate::shortcuts::{render_markup, RenderOptions};

static KBD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%\s*kbd\s+([^%]+)%\}").expect("kbd span pattern is valid"));

/// A located `{% kbd ... %}` span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KbdSpan<'a> {
    /// Byte range of the whole tag within the document.
    pub range: Range<usize>,
    /// The markup between `kbd` and `%}`, verbatim.
    pub markup: &'a str,
}

/// Find every kbd span in document order.
pub fn find_kbd_spans(text: &str) -> Vec<KbdSpan<'_>> {
    KBD_SPAN
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let markup = caps.get(1)?;
            Some(KbdSpan {
                range: whole.range(),
                markup: markup.as_str(),
            })
        })
        .collect()
}

/// Replace every kbd span with its rendered HTML, leaving all other text
/// untouched.
pub fn transform_document(text: &str, options: &RenderOptions) -> String {
    let mut rendered = 0usize;
    let output = KBD_SPAN.replace_all(text, |caps: &Captures| {
        rendered += 1;
        render_markup(&caps[1], options)
    });
    debug!(
        event_type = "transform",
        spans = rendered,
        input_len = text.len(),
        output_len = output.len(),
        "Rendered kbd spans"
    );
    output.into_owned()
}

/// Answer one host request: the transformed document for the pre-parse
/// phase, the text unchanged for any other phase.
pub fn process_request(request: &PluginRequest, options: &RenderOptions) -> String {
    if !request.wants_transform() {
        debug!(
            phase = ?request.phase,
            plugin_id = %request.plugin_id,
            "Phase does not expand kbd spans, passing text through"
        );
        return request.text().to_string();
    }
    transform_document(request.text(), options)
}
