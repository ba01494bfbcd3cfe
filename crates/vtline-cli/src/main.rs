//! vtline CLI: View a list of dated events on a vertical month timeline

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use vtline_engine::{
    compute_layout, generate_ticks, load_events, Config, Layout, Side, Tick, TickOrder,
    TimelineEvent,
};

/// Vertical month timeline for dated events
#[derive(Parser)]
#[command(name = "vtline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (JSON). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Write logs to this file (level from VTLINE_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive timeline viewer
    View {
        /// Events file (JSON array of {title, description, date})
        events: PathBuf,

        /// Oldest month at the top
        #[arg(long)]
        ascending: bool,
    },

    /// Print the month ticks covering the events
    Ticks {
        /// Events file (JSON array of {title, description, date})
        events: PathBuf,

        /// Oldest month first
        #[arg(long)]
        ascending: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print where each event is placed on the axis
    Layout {
        /// Events file (JSON array of {title, description, date})
        events: PathBuf,

        /// Oldest month first
        #[arg(long)]
        ascending: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

const DEFAULT_CONFIG: &str = "vtline.json";
const LOG_ENV: &str = "VTLINE_LOG";

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: failed to open log file {}: {e}", path.display());
            std::process::exit(1);
        }
    }

    let result = load_config(&cli.config).and_then(|config| match cli.command {
        Commands::View { events, ascending } => cmd_view(&events, ascending, config),
        Commands::Ticks {
            events,
            ascending,
            json,
        } => cmd_ticks(&events, ascending, json, &config),
        Commands::Layout {
            events,
            ascending,
            json,
        } => cmd_layout(&events, ascending, json, &config),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Send `tracing` output to `path`; the terminal belongs to the viewer.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    Ok(Config::load_or_default(path)?)
}

fn resolve_order(config: &Config, ascending: bool) -> TickOrder {
    if ascending {
        TickOrder::Ascending
    } else {
        config.order
    }
}

fn read_events(path: &Path) -> Result<Vec<TimelineEvent>, Box<dyn std::error::Error>> {
    let events = load_events(path)?;
    tracing::info!(path = %path.display(), count = events.len(), "Loaded events");
    Ok(events)
}

fn cmd_view(events_path: &Path, ascending: bool, mut config: Config) -> CliResult {
    let events = read_events(events_path)?;
    config.order = resolve_order(&config, ascending);
    vtline_tui::run_viewer(events, &config)
}

fn cmd_ticks(events_path: &Path, ascending: bool, json: bool, config: &Config) -> CliResult {
    let events = read_events(events_path)?;
    let ticks = generate_ticks(&events, resolve_order(config, ascending))?;
    println!("{}", format_ticks(&ticks, json)?);
    Ok(())
}

fn cmd_layout(events_path: &Path, ascending: bool, json: bool, config: &Config) -> CliResult {
    let events = read_events(events_path)?;
    let layout = compute_layout(
        &events,
        resolve_order(config, ascending),
        config.spacing(),
    )?;
    println!("{}", format_layout(&layout, &events, json)?);
    Ok(())
}

/// One label per line, or a JSON array of `{year, month, label}`.
fn format_ticks(ticks: &[Tick], json: bool) -> serde_json::Result<String> {
    if json {
        let output: Vec<_> = ticks
            .iter()
            .map(|tick| {
                serde_json::json!({
                    "year": tick.year(),
                    "month": tick.month(),
                    "label": tick.label(),
                })
            })
            .collect();
        return serde_json::to_string_pretty(&output);
    }

    Ok(ticks
        .iter()
        .map(Tick::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// A summary line plus one row per placement, or the whole layout as JSON.
fn format_layout(
    layout: &Layout,
    events: &[TimelineEvent],
    json: bool,
) -> serde_json::Result<String> {
    if json {
        let ticks: Vec<String> = layout.ticks.iter().map(|t| t.label()).collect();
        let output = serde_json::json!({
            "tick_spacing": layout.tick_spacing,
            "ticks": ticks,
            "placements": layout.placements,
        });
        return serde_json::to_string_pretty(&output);
    }

    let mut lines = vec![
        format!("{} ticks, spacing {}", layout.ticks.len(), layout.tick_spacing),
        String::new(),
    ];
    for placement in &layout.placements {
        let (Some(event), Some(tick)) = (
            events.get(placement.event_index),
            layout.ticks.get(placement.tick_index),
        ) else {
            continue;
        };
        let side = match placement.side {
            Side::Left => "left",
            Side::Right => "right",
        };
        lines.push(format!(
            "{:>3}  {tick}  row {:>4}  {side:<5}  {}",
            placement.event_index,
            placement.row(),
            event.title
        ));
    }
    Ok(lines.join("\n"))
}
