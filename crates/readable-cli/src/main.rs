//! Format byte counts, packed IPv4 addresses and durations for humans.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use readable_config::Settings;
use readable_core::{
    format_file_size, format_short_elapsed_time, format_short_file_size, ipv4_from_packed,
    logging::{self, LogOptions},
};
use readable_locale::{LocaleSet, StringTable};

/// Format byte counts, packed IPv4 addresses and durations for humans.
#[derive(Parser, Debug)]
#[command(name = "readable", version, about, long_about = None)]
struct Cli {
    /// Settings file. Defaults to `READABLE_CONFIG` or the platform config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Locale tag, e.g. `de` or `pt-BR`. Overrides the settings file.
    #[arg(short, long, global = true)]
    locale: Option<String>,
    /// More log output on stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Byte counts as sizes, e.g. `1.20 MB`.
    Size {
        /// Byte counts. Negative counts are printed in bytes.
        #[arg(required = true, allow_negative_numbers = true)]
        bytes: Vec<i64>,
        /// Fewer digits of precision.
        #[arg(short, long, conflicts_with = "long")]
        short: bool,
        /// Full precision even if the settings ask for short sizes.
        #[arg(long)]
        long: bool,
    },
    /// Packed little-endian IPv4 addresses as dotted quads.
    Ip {
        /// Decimal, `0x` hex, or a negative 32-bit integer.
        #[arg(required = true, allow_negative_numbers = true, value_parser = parse_packed)]
        packed: Vec<u32>,
    },
    /// Elapsed milliseconds as a short phrase, e.g. `1 day 5 hrs`.
    Elapsed {
        /// Elapsed time in milliseconds.
        #[arg(required = true)]
        millis: Vec<u64>,
    },
    /// List locales that resolve without falling back.
    Locales,
}

/// Parse a packed address the way it is usually printed by other tools.
fn parse_packed(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).map_err(|e| format!("invalid hex address {raw}: {e}"));
    }
    if let Ok(value) = raw.parse::<u32>() {
        return Ok(value);
    }
    raw.parse::<i32>()
        .map(|value| value as u32)
        .map_err(|e| format!("invalid packed address {raw}: {e}"))
}

/// Render one output line per input for `command`.
fn render(
    command: &Commands,
    settings: &Settings,
    locales: &LocaleSet,
    table: &StringTable,
) -> Result<Vec<String>> {
    let lines = match command {
        Commands::Size { bytes, short, long } => {
            let shorter = *short || (settings.short_sizes && !*long);
            bytes
                .iter()
                .map(|&count| {
                    let formatted = if shorter {
                        format_short_file_size(Some(table), count)
                    } else {
                        format_file_size(Some(table), count)
                    };
                    formatted.with_context(|| format!("failed to format {count} bytes"))
                })
                .collect::<Result<Vec<_>>>()?
        }
        Commands::Ip { packed } => packed
            .iter()
            .map(|&value| ipv4_from_packed(value).to_string())
            .collect(),
        Commands::Elapsed { millis } => millis
            .iter()
            .map(|&ms| {
                format_short_elapsed_time(table, ms)
                    .with_context(|| format!("failed to format {ms} ms"))
            })
            .collect::<Result<Vec<_>>>()?,
        Commands::Locales => locales.tags(),
    };
    Ok(lines)
}

/// Discover locale tables, pick the requested one and render the command.
fn run(cli: &Cli, settings: &Settings) -> Result<Vec<String>> {
    let locales = LocaleSet::discover(&settings.locale_dirs)?;
    let tag = cli.locale.as_deref().unwrap_or(&settings.locale);
    let table = locales.resolve(tag);
    tracing::info!(requested = tag, resolved = table.locale(), "locale selected");

    render(&cli.command, settings, &locales, table)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    logging::init(LogOptions {
        verbosity: cli.verbose,
        to_file: settings.log_to_file,
    })?;

    for line in run(&cli, &settings)? {
        println!("{line}");
    }
    Ok(())
}
