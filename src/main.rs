//! kbd-plugin - pre-parse plugin binary
//!
//! Reads one JSON request from stdin and writes the transformed markdown to
//! stdout.
//!
//! # Usage
//!
//! ```bash
//! export APEX_PRE_PARSE_PLUGIN="/path/to/kbd-plugin"
//! echo '{"version":1,"plugin_id":"kbd","phase":"pre_parse","text":"{% kbd cmd-s %}"}' | kbd-plugin
//! kbd-plugin --markup "ctrl-c / cmd-c"
//! ```

use std::io;

use clap::Parser;

use kbd_plugin::cli::{self, Args};
use kbd_plugin::logging;

fn main() {
    let args = Args::parse();
    let _guard = logging::init(args.log_file.as_deref());

    let result = cli::run_with(&args, io::stdin().lock(), &mut io::stdout().lock());
    if let Err(e) = result {
        tracing::error!(error = %format!("{:#}", e), "kbd-plugin failed");
        eprintln!("kbd-plugin: {}", cli::error_line(&e));
        std::process::exit(1);
    }
}
