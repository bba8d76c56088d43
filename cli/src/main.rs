use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use roundrect::config::SceneConfig;
use roundrect::input::GestureEvent;
use roundrect::render::Recorder;
use roundrect::scene::SceneController;
use serde::Serialize;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid scene config: {0}")]
    Config(#[from] roundrect::error::ConfigError),
    #[error("invalid gesture script: {0}")]
    Gestures(serde_json::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "roundrect", about = "Inspect and replay rounded-rectangle scenes")]
struct Cli {
    /// Scene config JSON. The built-in demo scene is used when absent.
    #[arg(long, env = "ROUNDRECT_SCENE")]
    scene: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene's shape snapshots.
    Snapshot,
    /// Print the draw commands for the initial scene.
    Render,
    /// Feed a gesture script to the scene and print the result.
    Replay {
        #[arg(long, default_value = "-", help = "Gesture script path, or - for stdin")]
        gestures: String,

        #[arg(long, default_value_t = false, help = "Print the final frame's draw commands instead of snapshots")]
        draw: bool,
    },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = load_config(cli.scene.as_deref())?;
    let mut scene = SceneController::from_config(&config);
    tracing::info!(shapes = scene.len(), "scene loaded");

    match cli.command {
        Command::Snapshot => print_json(&scene.snapshots()),
        Command::Render => print_json(&record(&scene).commands),
        Command::Replay { gestures, draw } => {
            let events = parse_gestures(&read_input(&gestures)?)?;
            replay(&mut scene, &events);
            if draw {
                print_json(&record(&scene).commands)
            } else {
                print_json(&scene.snapshots())
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SceneConfig, CliError> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };
    let json = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.display().to_string(), source })?;
    Ok(SceneConfig::from_json(&json)?)
}

fn read_input(path: &str) -> Result<String, CliError> {
    let mut buf = String::new();
    if path == "-" {
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read { path: "<stdin>".to_owned(), source })?;
    } else {
        buf = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    }
    Ok(buf)
}

fn parse_gestures(json: &str) -> Result<Vec<GestureEvent>, CliError> {
    serde_json::from_str(json).map_err(CliError::Gestures)
}

/// Feed every event to the scene. Returns how many events asked for a redraw.
fn replay(scene: &mut SceneController, events: &[GestureEvent]) -> usize {
    let mut redraws = 0;
    for event in events {
        let actions = scene.handle(*event);
        tracing::debug!(?event, ?actions, "gesture applied");
        if actions.contains(&roundrect::scene::Action::RenderNeeded) {
            redraws += 1;
        }
    }
    tracing::info!(events = events.len(), redraws, dragging = scene.is_dragging(), "replay finished");
    redraws
}

fn record(scene: &SceneController) -> Recorder {
    let mut rec = Recorder::new();
    match scene.render(&mut rec) {
        Ok(()) => rec,
        Err(never) => match never {},
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
