//! # RingConfig CLI
//!
//! Command-line front end for the ring sizing engine: collects the six
//! inputs (flags or prompts), prints the report and optionally writes the
//! CAD variable block, a JSON result and an SVG top view.

mod svg;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ring_core::file_io::{load_motor_database, load_settings, write_text_atomic};
use ring_core::inputs::RawInputs;
use ring_core::motors::{MotorTable, MOTOR_COUNT_OPTIONS};
use ring_core::session::DesignSession;
use ring_core::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "ring_cli")]
#[command(about = "Ducted-ring multirotor configurator")]
#[command(version)]
struct Args {
    /// Prop diameter in inches (also the motor table key)
    #[arg(long, allow_hyphen_values = true)]
    prop: Option<String>,

    /// Number of motors
    #[arg(long, allow_hyphen_values = true)]
    motors: Option<String>,

    /// Payload mass (kg)
    #[arg(long, allow_hyphen_values = true)]
    payload: Option<String>,

    /// Frame + battery + motors mass (kg)
    #[arg(long, allow_hyphen_values = true)]
    frame: Option<String>,

    /// Desired thrust-to-weight ratio
    #[arg(long, allow_hyphen_values = true)]
    twr: Option<String>,

    /// Prop tip to tube inner wall clearance (mm)
    #[arg(long, allow_hyphen_values = true)]
    clearance: Option<String>,

    /// Prompt for each input, using flag values as defaults
    #[arg(short, long)]
    interactive: bool,

    /// Print the full result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Write the CAD variable block to this file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Write an SVG top view to this file
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,

    /// SVG canvas size in pixels (square)
    #[arg(long, default_value_t = 400)]
    canvas: u32,

    /// Settings file (design constants and optional motor table)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Motor table file, replaces the one from settings
    #[arg(long, value_name = "FILE")]
    motor_db: Option<PathBuf>,

    /// List prop sizes in the motor table and exit
    #[arg(long)]
    list_props: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Flag values over the form defaults
    fn raw_inputs(&self) -> RawInputs {
        let d = RawInputs::default();
        RawInputs {
            prop_diameter_in: self.prop.clone().unwrap_or(d.prop_diameter_in),
            motor_count: self.motors.clone().unwrap_or(d.motor_count),
            payload_mass_kg: self.payload.clone().unwrap_or(d.payload_mass_kg),
            frame_mass_kg: self.frame.clone().unwrap_or(d.frame_mass_kg),
            thrust_to_weight: self.twr.clone().unwrap_or(d.thrust_to_weight),
            clearance_mm: self.clearance.clone().unwrap_or(d.clearance_mm),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Ask for one field; an empty answer keeps `default`.
fn prompt_field(prompt: &str, default: &str) -> String {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let answer = input.trim();
    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}

fn prompt_inputs(defaults: RawInputs, settings: &Settings) -> RawInputs {
    let props = settings.motor_table().prop_sizes().join(", ");
    let counts: Vec<String> = MOTOR_COUNT_OPTIONS.iter().map(ToString::to_string).collect();

    RawInputs {
        prop_diameter_in: prompt_field(
            &format!("Prop diameter (in) [table: {}]", props),
            &defaults.prop_diameter_in,
        ),
        motor_count: prompt_field(
            &format!("Number of motors ({})", counts.join("/")),
            &defaults.motor_count,
        ),
        payload_mass_kg: prompt_field("Payload mass (kg)", &defaults.payload_mass_kg),
        frame_mass_kg: prompt_field("Frame+battery+motors mass (kg)", &defaults.frame_mass_kg),
        thrust_to_weight: prompt_field("Desired thrust-to-weight ratio", &defaults.thrust_to_weight),
        clearance_mm: prompt_field("Prop tip clearance to tube (mm)", &defaults.clearance_mm),
    }
}

fn load_session_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if let Some(path) = &args.motor_db {
        let db = load_motor_database(path)
            .with_context(|| format!("failed to load motor table from {}", path.display()))?;
        settings.motors = Some(db);
    }

    Ok(settings)
}

fn list_props(settings: &Settings) {
    let table = settings.motor_table();
    println!("Prop sizes in motor table ({} entries):", table.len());
    for prop in table.prop_sizes() {
        if let Some(thrust) = table.max_thrust_n(prop) {
            println!("  {:>5} in  {:>6.0} N", prop, thrust);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(?args, "parsed arguments");

    let settings = load_session_settings(&args)?;

    if args.list_props {
        list_props(&settings);
        return Ok(());
    }

    let raw = if args.interactive {
        println!("RingConfig - Ducted Ring Configurator");
        println!("=====================================");
        println!();
        prompt_inputs(args.raw_inputs(), &settings)
    } else {
        args.raw_inputs()
    };

    let mut session = DesignSession::new(settings);
    let snapshot = match session.compute(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) if e.is_validation() => bail!("{}", e),
        Err(e) => return Err(e.into()),
    };

    if args.json {
        let json = serde_json::to_string_pretty(snapshot).context("failed to serialize result")?;
        println!("{}", json);
    } else {
        println!("{}", snapshot.report.human);
    }

    if let Some(path) = &args.export {
        session
            .save_export(path)
            .with_context(|| format!("failed to export to {}", path.display()))?;
        info!(path = %path.display(), "export written");
        if !args.json {
            println!();
            println!("Export saved to {}", path.display());
        }
    }

    if let Some(path) = &args.svg {
        let doc = svg::render(&session.layout(), args.canvas, args.canvas)
            .context("failed to render SVG")?;
        write_text_atomic(path, &doc)
            .with_context(|| format!("failed to write SVG to {}", path.display()))?;
        info!(path = %path.display(), canvas = args.canvas, "svg written");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::parse_from(["ring_cli"]);
        assert_eq!(args.raw_inputs(), RawInputs::default());
        assert_eq!(args.canvas, 400);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from(["ring_cli", "--prop", "30", "--motors", "6", "--clearance", "-5"]);
        let raw = args.raw_inputs();
        assert_eq!(raw.prop_diameter_in, "30");
        assert_eq!(raw.motor_count, "6");
        assert_eq!(raw.clearance_mm, "-5");
        assert_eq!(raw.payload_mass_kg, "10.0");
    }

    #[test]
    fn test_verbose_counts() {
        let args = Args::parse_from(["ring_cli", "-vv"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_motor_db_replaces_table() {
        let path = std::env::temp_dir().join("ringconfig_test_cli_motors.json");
        std::fs::write(&path, r#"{ "entries": { "40": { "max_thrust_n": 500.0 } } }"#).unwrap();

        let args = Args::parse_from(["ring_cli", "--motor-db", path.to_str().unwrap()]);
        let settings = load_session_settings(&args).unwrap();
        assert_eq!(settings.motor_table().max_thrust_n("40"), Some(500.0));
        assert_eq!(settings.motor_table().max_thrust_n("26"), None);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_settings_file_errors() {
        let args = Args::parse_from(["ring_cli", "--settings", "/nonexistent/ring.json"]);
        assert!(load_session_settings(&args).is_err());
    }
}
