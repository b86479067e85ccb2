mod app;
mod color;
mod config;
mod input;
mod mixer;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use color::{palette, Rgb};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hexmix", version, about = "Color code viewer and mixer")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print the color table.
    Palette {
        #[arg(long)]
        json: bool,
    },
    /// Print the hex code for a symbol (b1..b7).
    Resolve { symbol: String },
    /// Print the label for a hex code.
    Label { hex_code: String },
    /// Mix colors given as symbols or hex codes and print the result.
    Mix {
        #[arg(required = true)]
        colors: Vec<String>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct PaletteRow {
    symbol: &'static str,
    hex_code: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct MixReport {
    inputs: Vec<String>,
    result: String,
    label: Option<&'static str>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    palette::validate().context("color table is broken")?;

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_file_logging(&cfg).context("init logging")?;
            tracing::info!(config = %cfg_path.display(), "starting tui");

            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Palette { json } => {
            init_stderr_logging();
            let rows: Vec<PaletteRow> = palette::entries()
                .iter()
                .map(|e| PaletteRow {
                    symbol: e.symbol,
                    hex_code: e.hex_code,
                    label: e.label,
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{}  {}  {}", row.symbol, row.hex_code, row.label);
                }
            }
        }
        Command::Resolve { symbol } => {
            init_stderr_logging();
            println!("{}", palette::resolve_hex(&symbol)?);
        }
        Command::Label { hex_code } => {
            init_stderr_logging();
            println!("{}", palette::resolve_label(&hex_code)?);
        }
        Command::Mix { colors, json } => {
            init_stderr_logging();
            let report = mix_args(&colors)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match report.label {
                    Some(label) => println!("{}  {}", report.result, label),
                    None => println!("{}", report.result),
                }
            }
        }
    }

    Ok(())
}

/// Each argument is either a table symbol or a `#rrggbb` code.
fn mix_args(args: &[String]) -> anyhow::Result<MixReport> {
    let mut mixer = mixer::Mixer::new();
    let mut inputs = Vec::with_capacity(args.len());

    for arg in args {
        let code = if arg.starts_with('#') {
            arg.as_str()
        } else {
            palette::resolve_hex(arg)?
        };
        let rgb = mixer.add(code).with_context(|| format!("argument {arg:?}"))?;
        tracing::debug!(%arg, %rgb, "mix input");
        inputs.push(rgb.to_string());
    }

    let result: Rgb = mixer.mix();
    Ok(MixReport {
        inputs,
        result: result.to_string(),
        label: palette::label_for(result),
    })
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("HEXMIX_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The TUI owns the terminal, so logs go to a file in the data dir.
fn init_file_logging(cfg: &config::Config) -> anyhow::Result<()> {
    let dir = &cfg.paths.data_dir;
    std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
    let path = dir.join("hexmix.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
