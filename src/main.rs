//! Command line front end: generate fretboard geometry as JSON.
//!
//! ```text
//! fretboard --scale 25.5 --scale-unit in --frets 24 --draw-profile
//! fretboard --config guitar.json --output guitar.fretboard.json
//! RUST_LOG=fretboard=debug fretboard
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fretboard::params::{FretboardOptions, Rgba, Unit};

#[derive(Parser, Debug)]
#[command(name = "fretboard")]
#[command(about = "Compute fretboard outline, frets, strings, slot toolpaths and side profile")]
#[command(version)]
struct Cli {
    /// JSON file with base options; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the drawing here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[arg(long)]
    scale: Option<f64>,
    #[arg(long)]
    scale_unit: Option<Unit>,
    #[arg(long)]
    fretboard_thickness: Option<f64>,
    #[arg(long)]
    fretboard_thickness_unit: Option<Unit>,

    /// Number of strings
    #[arg(long)]
    strings: Option<u32>,
    /// Packed 0xRRGGBBAA string color
    #[arg(long)]
    strings_color: Option<u32>,

    #[arg(long)]
    nut_radius: Option<f64>,
    #[arg(long)]
    nut_radius_unit: Option<Unit>,
    #[arg(long)]
    nut_width: Option<f64>,
    #[arg(long)]
    nut_width_unit: Option<Unit>,
    /// Distance between the outer strings at the nut
    #[arg(long)]
    nut_string_space: Option<f64>,
    #[arg(long)]
    nut_string_space_unit: Option<Unit>,

    #[arg(long)]
    bridge_radius: Option<f64>,
    #[arg(long)]
    bridge_radius_unit: Option<Unit>,
    #[arg(long)]
    bridge_width: Option<f64>,
    #[arg(long)]
    bridge_width_unit: Option<Unit>,
    /// Compute the bridge width from string spacing
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    ignore_bridge_width: Option<bool>,
    /// Distance between two strings at the bridge
    #[arg(long)]
    bridge_string_space: Option<f64>,
    #[arg(long)]
    bridge_string_space_unit: Option<Unit>,

    /// Number of frets
    #[arg(long)]
    frets: Option<u32>,
    /// Packed 0xRRGGBBAA fret color
    #[arg(long)]
    frets_color: Option<u32>,
    /// Comma separated string gauges, thinnest first
    #[arg(long)]
    strings_gauges: Option<String>,
    #[arg(long)]
    frets_tang_width: Option<f64>,
    #[arg(long)]
    frets_tang_width_unit: Option<Unit>,
    #[arg(long)]
    frets_crown_height: Option<f64>,
    #[arg(long)]
    frets_crown_height_unit: Option<Unit>,
    #[arg(long)]
    frets_crown_width: Option<f64>,
    #[arg(long)]
    frets_crown_width_unit: Option<Unit>,
    /// Ignore string gauges, don't draw fret crowns
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    ignore_custom_width: Option<bool>,

    /// Draw the fretboard side view
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    draw_profile: Option<bool>,

    /// Draw fret slot toolpaths
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    ftp_tool_draw: Option<bool>,
    #[arg(long)]
    ftp_tool_diameter: Option<f64>,
    #[arg(long)]
    ftp_tool_diameter_unit: Option<Unit>,
    /// Tool stepover in percent
    #[arg(long)]
    ftp_tool_stepover: Option<u32>,
    #[arg(long)]
    ftp_slot_width: Option<f64>,
    #[arg(long)]
    ftp_slot_width_unit: Option<Unit>,
    #[arg(long)]
    ftp_slot_margin: Option<f64>,
    #[arg(long)]
    ftp_slot_margin_unit: Option<Unit>,

    /// Show debug messages
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    debug: Option<bool>,
}

/// Copies every flag that was given onto `options`.
macro_rules! override_fields {
    ($cli:ident, $options:ident; plain: $($plain:ident),* ; measures: $($measure:ident / $unit:ident),* $(;)?) => {
        $(
            if let Some(v) = $cli.$plain.clone() {
                $options.$plain = v.into();
            }
        )*
        $(
            if let Some(v) = $cli.$measure {
                $options.$measure.value = v;
            }
            if let Some(u) = $cli.$unit {
                $options.$measure.unit = u;
            }
        )*
    };
}

impl Cli {
    fn options(&self) -> Result<FretboardOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing options from {}", path.display()))?
            }
            None => FretboardOptions::default(),
        };

        override_fields!(self, options;
            plain: strings, ignore_bridge_width, frets, strings_gauges,
                ignore_custom_width, draw_profile, ftp_tool_draw, ftp_tool_stepover, debug;
            measures: scale / scale_unit,
                fretboard_thickness / fretboard_thickness_unit,
                nut_radius / nut_radius_unit,
                nut_width / nut_width_unit,
                nut_string_space / nut_string_space_unit,
                bridge_radius / bridge_radius_unit,
                bridge_width / bridge_width_unit,
                bridge_string_space / bridge_string_space_unit,
                frets_tang_width / frets_tang_width_unit,
                frets_crown_height / frets_crown_height_unit,
                frets_crown_width / frets_crown_width_unit,
                ftp_tool_diameter / ftp_tool_diameter_unit,
                ftp_slot_width / ftp_slot_width_unit,
                ftp_slot_margin / ftp_slot_margin_unit;
        );
        if let Some(c) = self.strings_color {
            options.strings_color = Rgba(c);
        }
        if let Some(c) = self.frets_color {
            options.frets_color = Rgba(c);
        }
        Ok(options)
    }
}

/// `RUST_LOG` when set, otherwise WARN; `--debug` adds DEBUG for this crate.
fn log_filter(rust_log: Option<&str>, debug: bool) -> EnvFilter {
    let base = rust_log.filter(|s| !s.trim().is_empty()).unwrap_or("warn");
    if debug {
        EnvFilter::new(format!("{base},fretboard=debug"))
    } else {
        EnvFilter::new(base)
    }
}

fn init_tracing(debug: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), debug))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options()?;
    init_tracing(options.debug);

    let board = fretboard::generate(&options).context("generating fretboard")?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&board)?
    } else {
        serde_json::to_string(&board)?
    };
    match &cli.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
