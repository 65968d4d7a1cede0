use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hex colors, localized text and appearance from the command line.
#[derive(Parser, Debug)]
#[command(name = "tinct", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug`, `tinct_l10n=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a color from #RGB, #RRGGBB or #AARRGGBB.
    Color {
        hex: String,

        /// Reject malformed input instead of degrading.
        #[arg(long)]
        strict: bool,
    },

    /// Build a color from a 0xRRGGBB integer.
    Rgb {
        #[arg(value_parser = parse_int)]
        value: u64,

        /// Alpha in 0.0-1.0 (defaults to color.default_alpha).
        #[arg(long)]
        alpha: Option<f64>,
    },

    /// Resolve a key against catalog entries given with --entry.
    Localize {
        key: String,

        /// Resource bundle (defaults to localization.default_bundle).
        #[arg(long)]
        bundle: Option<String>,

        /// Translator comment.
        #[arg(long)]
        comment: Option<String>,

        /// KEY=VALUE catalog entry, repeatable.
        #[arg(long = "entry", value_parser = parse_entry)]
        entries: Vec<(String, String)>,
    },

    /// Replace literal \n escapes with line breaks.
    Unescape { text: String },

    /// Print the effective dark-mode flag.
    Appearance,

    /// Print the effective configuration.
    Config {
        /// Write the commented default config file if none exists.
        #[arg(long)]
        init: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

/// Accepts `0x`-prefixed hex or decimal.
fn parse_int(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid integer {s:?}: {e}"))
}

fn parse_entry(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))?;
    if key.is_empty() {
        return Err(format!("empty key in {s:?}"));
    }
    Ok((key.to_owned(), value.to_owned()))
}
