//! Subcommand execution.

use serde::Serialize;
use tinct_common::{Color, TinctError};
use tinct_config::TinctConfig;
use tinct_l10n::{unescape_newlines, BundleScope, LocalizedKey, StaticCatalog};
use tracing::debug;

use crate::cli::{Args, Command};

#[derive(Debug, Serialize)]
struct ColorReport {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
    hex: String,
}

impl From<Color> for ColorReport {
    fn from(color: Color) -> Self {
        Self {
            red: color.red,
            green: color.green,
            blue: color.blue,
            alpha: color.alpha,
            hex: color.to_hex(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AppearanceReport {
    dark: bool,
    supported: bool,
    mode: tinct_common::AppearanceMode,
}

pub fn run(args: &Args, config: &TinctConfig) -> tinct_common::Result<()> {
    match &args.command {
        Command::Color { hex, strict } => {
            let color = if *strict {
                Color::parse_hex(hex)?
            } else {
                Color::from_hex_with(hex, config.color.invalid_hex)
            };
            print_color(color, args.json)
        }
        Command::Rgb { value, alpha } => {
            let alpha = alpha.unwrap_or(config.color.default_alpha);
            print_color(Color::from_rgb_hex(*value, alpha), args.json)
        }
        Command::Localize {
            key,
            bundle,
            comment,
            entries,
        } => {
            let bundle = bundle
                .as_deref()
                .unwrap_or(&config.localization.default_bundle);
            let scope = BundleScope::from_bundle_name(bundle);
            let catalog = catalog_for(&scope, entries);
            debug!(%scope, entries = catalog.len(), "resolving key");

            let mut key = LocalizedKey::new(key.as_str()).in_scope(scope);
            if let Some(comment) = comment {
                key = key.with_comment(comment.as_str());
            }
            let text = key.localize_in(&catalog);
            if args.json {
                print_json(&serde_json::json!({ "key": key.key(), "text": text }))
            } else {
                println!("{text}");
                Ok(())
            }
        }
        Command::Unescape { text } => {
            println!("{}", unescape_newlines(text));
            Ok(())
        }
        Command::Appearance => {
            let report = AppearanceReport {
                dark: tinct_platform::effective_dark_mode(config.appearance.mode),
                supported: tinct_platform::APPEARANCE_SUPPORTED,
                mode: config.appearance.mode,
            };
            if args.json {
                print_json(&report)
            } else {
                println!("{}", if report.dark { "dark" } else { "light" });
                Ok(())
            }
        }
        Command::Config { init } => {
            if *init {
                init_config(args)?;
            }
            println!("{}", tinct_config::config_to_json(config));
            Ok(())
        }
    }
}

/// Write the default config template unless a file is already there.
fn init_config(args: &Args) -> tinct_common::Result<bool> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => tinct_platform::config_file()?,
    };
    Ok(tinct_config::create_default_config(&path)?)
}

/// Put every `--entry` into the table for `scope`.
fn catalog_for(scope: &BundleScope, entries: &[(String, String)]) -> StaticCatalog {
    let mut catalog = StaticCatalog::new();
    for (key, value) in entries {
        match scope {
            BundleScope::Process => catalog.insert(key.as_str(), value.as_str()),
            BundleScope::Named(bundle) => {
                catalog.insert_in_bundle(bundle.as_str(), key.as_str(), value.as_str())
            }
        }
    }
    catalog
}

fn print_color(color: Color, json: bool) -> tinct_common::Result<()> {
    if json {
        return print_json(&ColorReport::from(color));
    }
    println!(
        "{} red={:.4} green={:.4} blue={:.4} alpha={:.4}",
        color.to_hex(),
        color.red,
        color.green,
        color.blue,
        color.alpha
    );
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> tinct_common::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| TinctError::Other(format!("failed to serialize output: {e}")))?;
    println!("{json}");
    Ok(())
}
