//! Interactive command loop.
//!
//! Reads commands from stdin while a ticker drives refresh cycles; both are
//! multiplexed with `tokio::select!`. A failed command is reported and the
//! loop carries on.

use std::path::PathBuf;

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::camera;
use crate::client::DetectClient;
use crate::config::DashboardConfig;
use crate::controls::Sensor;
use crate::dashboard::Dashboard;
use crate::render;

pub const HELP: &str = "\
Commands:
  temp <value>    set temperature (°C, 20-150)
  smoke <value>   set smoke level (%, 0-100)
  gas <value>     set gas level (ppm, 0-1000)
  analyze         classify the current reading
  image <path>    annotate a JPEG/PNG camera image
  history         show the sensor history
  show            redraw the dashboard
  help            show this help
  quit            exit";

/// A parsed stdin command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Sensor, f64),
    Analyze,
    Image(PathBuf),
    History,
    Show,
    Help,
    Quit,
}

/// A line of input that is not a valid command.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = parts.collect();

    let command = match word.to_ascii_lowercase().as_str() {
        "temp" | "temperature" => Command::Set(Sensor::Temperature, number(&rest, "temp")?),
        "smoke" => Command::Set(Sensor::Smoke, number(&rest, "smoke")?),
        "gas" => Command::Set(Sensor::Gas, number(&rest, "gas")?),
        "analyze" | "a" => Command::Analyze,
        "image" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("image"));
            }
            Command::Image(PathBuf::from(rest.join(" ")))
        }
        "history" => Command::History,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn number(args: &[&str], command: &'static str) -> Result<f64, CommandError> {
    let raw = args.first().ok_or(CommandError::MissingArgument(command))?;
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber((*raw).to_string()))
}

/// What the loop should do after a command.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Print this text and keep going.
    Continue(String),
    Quit,
}

/// Apply one command to the session.
pub async fn execute(dashboard: &mut Dashboard, client: &DetectClient, command: Command) -> Outcome {
    match command {
        Command::Set(sensor, value) => {
            let applied = dashboard.set_sensor(sensor, value);
            dashboard.refresh(Utc::now());
            if applied != value {
                tracing::debug!(?sensor, requested = value, applied, "Clamped control value");
            }
            Outcome::Continue(render::render_dashboard(dashboard))
        }
        Command::Analyze => {
            dashboard.analyze(client).await;
            Outcome::Continue(render::render_status_panel(dashboard.last_analysis()))
        }
        Command::Image(path) => match camera::annotate_file(&path) {
            Ok(output) => Outcome::Continue(format!("Annotated image written to {}", output.display())),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Camera image rejected");
                Outcome::Continue(format!("Image error: {e}"))
            }
        },
        Command::History => Outcome::Continue(render::render_history(dashboard.history())),
        Command::Show => Outcome::Continue(render::render_dashboard(dashboard)),
        Command::Help => Outcome::Continue(HELP.to_string()),
        Command::Quit => Outcome::Quit,
    }
}

/// Run the dashboard until `quit` or end of input.
pub async fn run(config: &DashboardConfig, client: &DetectClient, mut dashboard: Dashboard) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval_at(
        tokio::time::Instant::now() + config.refresh_interval,
        config.refresh_interval,
    );

    dashboard.refresh(Utc::now());
    println!("{}", render::render_dashboard(&dashboard));
    println!("{HELP}");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if config.simulate_drift {
                    dashboard.controls_mut().drift(&mut rand::rng());
                }
                dashboard.refresh(Utc::now());
            }
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        tracing::info!("Input closed, exiting");
                        break;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read input");
                        break;
                    }
                };

                match parse_command(&line) {
                    Ok(Some(command)) => match execute(&mut dashboard, client, command).await {
                        Outcome::Continue(text) => println!("{text}"),
                        Outcome::Quit => break,
                    },
                    Ok(None) => {}
                    Err(e) => println!("{e}"),
                }
            }
        }
    }
}
