//! `sortable-list` command line.
//!
//! Replays a scripted pointer session against the reference host and prints
//! what happened:
//!
//! ```text
//! sortable-list replay session.toml                  # one line per step, then the final order
//! sortable-list replay session.toml --json           # the full report as JSON
//! sortable-list replay session.toml --render         # the list after every step
//! sortable-list replay session.toml --config sortable.toml --trace
//! ```

use clap::{Parser, Subcommand};
use sortable_list::infrastructure::default_trace_path;
use sortable_list::observability::init_tracing;
use sortable_list::replay::{ReplayReport, Runner, Script};
use sortable_list::{ui, Config, Result, Theme};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(
    name = "sortable-list",
    version,
    about = "Drag-and-drop list reordering engine",
    long_about = "Runs scripted pointer sessions against a drag-and-drop reorderable list and reports the resulting order."
)]
struct Cli {
    /// Configuration file (TOML)
    #[clap(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Export spans to the configured trace file, or the default one
    #[clap(long, global = true)]
    trace: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a TOML script of pointer events
    Replay {
        /// Script to run
        script: PathBuf,

        /// Print the full report as JSON
        #[clap(long, conflicts_with = "render")]
        json: bool,

        /// Draw the list after every step
        #[clap(long)]
        render: bool,

        /// Width of rendered rows, in columns
        #[clap(long, default_value_t = 40)]
        cols: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "command failed");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let trace_file = cli
        .trace
        .then(|| config.trace_path().unwrap_or_else(default_trace_path));
    init_tracing(&config, trace_file.as_deref());

    match cli.command {
        Command::Replay { script, json, render, cols } => {
            let script = Script::from_file(&script)?;
            tracing::info!(
                items = script.items.len(),
                events = script.events.len(),
                "replaying script"
            );

            if render {
                let theme = config.load_theme()?;
                return replay_rendered(&script, &config, &theme, cols);
            }

            let report = Runner::run(&script, config.engine)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_summary(&report);
            }
            Ok(())
        }
    }
}

fn replay_rendered(script: &Script, config: &Config, theme: &Theme, cols: usize) -> Result<()> {
    let mut runner = Runner::new(script, config.engine);
    print!("{}", ui::render(runner.list(), Some(theme), cols));

    for (step, event) in script.events.iter().enumerate() {
        let record = runner.step(step, event)?;
        println!(
            "{}{}#{step} {:?}{}",
            Theme::dim(),
            Theme::fg(&theme.colors.text_dim),
            record.event,
            Theme::reset()
        );
        print!("{}", ui::render(runner.list(), Some(theme), cols));
    }
    Ok(())
}

fn print_summary(report: &ReplayReport) {
    for record in &report.steps {
        let delivered = if record.delivered { "" } else { " (no listener)" };
        println!(
            "#{:<3} {:?}{delivered} -> {:?} [{}]",
            record.step,
            record.event,
            record.actions,
            record.order.join(", ")
        );
    }
    println!("final order: {}", report.final_order.join(", "));
    if report.destroyed {
        println!("list destroyed");
    }
}
