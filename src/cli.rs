//! Command-line surface of the plugin binary.
//!
//! `run_with` takes the input and output streams explicitly so the binary
//! passes stdin/stdout and tests pass in-memory buffers. The whole output is
//! built before anything is written, so a failed run leaves the output empty.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::config::{self, ConfigOverrides};
use crate::error::KbdPluginError;
use crate::protocol;
use crate::shortcuts::{render_markup, RenderOptions};
use crate::transform::{process_request, transform_document};

#[derive(Parser, Debug, Default)]
#[command(
    name = "kbd-plugin",
    version,
    about = "Render {% kbd ... %} shortcut notation as HTML"
)]
pub struct Args {
    /// Config file (default: <config dir>/kbd-plugin/config.json).
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Show named keys as text (Esc) instead of glyphs.
    #[arg(long)]
    pub text_keys: bool,

    /// Show modifiers as text (Command) instead of glyphs.
    #[arg(long)]
    pub text_mods: bool,

    /// Put a visible + between modifiers and key.
    #[arg(long)]
    pub plus: bool,

    /// Render a single markup field and exit, without reading stdin.
    #[arg(long, value_name = "MARKUP", conflicts_with = "raw")]
    pub markup: Option<String>,

    /// Treat stdin as the document itself instead of a JSON request.
    #[arg(long)]
    pub raw: bool,

    /// Also write JSONL logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Render options from the config file with the CLI flags applied on top.
    pub fn render_options(&self) -> RenderOptions {
        let overrides = ConfigOverrides {
            text_keys: self.text_keys,
            text_mods: self.text_mods,
            plus: self.plus,
        };
        config::load_config(self.config.as_deref())
            .with_overrides(overrides)
            .render_options()
    }
}

/// Run one invocation: pick the input mode, transform, write the result.
///
/// `input` is not read at all in `--markup` mode.
pub fn run_with<R: Read, W: Write>(args: &Args, mut input: R, output: &mut W) -> Result<()> {
    let options = args.render_options();
    debug!(options = ?options, "Resolved render options");

    let rendered = match &args.markup {
        Some(markup) => render_markup(markup, &options),
        None if args.raw => {
            let mut text = String::new();
            input
                .read_to_string(&mut text)
                .map_err(KbdPluginError::from)
                .context("reading document from stdin")?;
            transform_document(&text, &options)
        }
        None => {
            let request = protocol::read_request(input).context("reading plugin request")?;
            process_request(&request, &options)
        }
    };

    output
        .write_all(rendered.as_bytes())
        .map_err(KbdPluginError::from)
        .context("writing transformed text")?;
    output
        .flush()
        .map_err(KbdPluginError::from)
        .context("flushing output")?;
    Ok(())
}

/// One line for stderr: the friendly message for plugin errors, else the
/// full context chain.
pub fn error_line(err: &anyhow::Error) -> String {
    err.downcast_ref::<KbdPluginError>()
        .map(|e| e.user_message())
        .unwrap_or_else(|| format!("{:#}", err))
}
