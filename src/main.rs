//! termpong - a single-player ball-and-paddle game for the terminal
//!
//! Keep the ball in play with the paddle on the right side of the court.
//! Each miss costs one ball; the game ends when the last one is lost and
//! reports how long you lasted.
//!
//! # Quick Start
//!
//! ```text
//! termpong              # 3 balls, 50 ticks per second
//! termpong -l 5         # 5 balls
//! termpong --seed 42    # Reproducible serves
//! ```
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | k / Up | Paddle up |
//! | m / Down | Paddle down |
//! | Q / Esc | Quit |

mod config;
mod core;
mod error;
mod ui;

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{ColorScheme, Config};
use crate::core::{session, Game};
use crate::error::GameError;
use crate::ui::{KeyMapper, Renderer, TerminalInput};

/// How long the final time stays on screen
const GAME_OVER_HOLD: Duration = Duration::from_secs(2);

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command line overrides
#[derive(Debug, Default, PartialEq)]
struct Options {
    /// Balls per game
    lives: Option<u32>,
    /// Timer rate
    ticks: Option<u32>,
    /// Serve seed
    seed: Option<u64>,
    /// Color scheme name
    scheme: Option<String>,
    /// Alternate config file
    config_path: Option<PathBuf>,
}

impl Options {
    /// Apply overrides on top of the config file
    fn apply(&self, config: &mut Config) {
        if let Some(lives) = self.lives {
            config.lives = lives.max(1);
        }
        if let Some(ticks) = self.ticks {
            config.ticks_per_second = ticks.clamp(1, 1000);
        }
        if let Some(ref scheme) = self.scheme {
            config.color_scheme = scheme.clone();
        }
    }
}

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Cli {
    Help,
    Version,
    Play(Options),
}

fn print_version() {
    eprintln!("termpong {}", VERSION);
}

fn print_help() {
    eprintln!("termpong {} - A ball-and-paddle game for the terminal", VERSION);
    eprintln!();
    eprintln!("Usage: termpong [OPTIONS]");
    eprintln!();
    eprintln!("Game options:");
    eprintln!("  -l, --lives <N>       Balls per game (default: 3)");
    eprintln!("  -t, --ticks <N>       Timer ticks per second (default: 50)");
    eprintln!("      --seed <N>        Seed for serve positions and speeds");
    eprintln!();
    eprintln!("Display options:");
    eprintln!("      --scheme <NAME>   Color scheme");
    eprintln!();
    eprintln!("Other options:");
    eprintln!("  -c, --config <PATH>   Read configuration from PATH");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  k, Up                 Paddle up");
    eprintln!("  m, Down               Paddle down");
    eprintln!("  Q, Esc                Quit");
    eprintln!();
    eprintln!("The terminal must be at least 40x11 and must not be resized during play.");
    eprintln!();
    eprintln!("Configuration: ~/.termpong/config.toml");
    eprintln!("Log file:      ~/.termpong/termpong.log");
    eprintln!();
    eprintln!("Color schemes: {}", ColorScheme::list().join(", "));
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("Missing value for {}", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut options = Options::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Cli::Help),
            "-v" | "--version" => return Ok(Cli::Version),
            "-l" | "--lives" => {
                i += 1;
                options.lives = Some(parse_number(&args[i - 1], args.get(i))?);
            }
            "-t" | "--ticks" => {
                i += 1;
                options.ticks = Some(parse_number(&args[i - 1], args.get(i))?);
            }
            "--seed" => {
                i += 1;
                options.seed = Some(parse_number(&args[i - 1], args.get(i))?);
            }
            "--scheme" => {
                i += 1;
                let name = args.get(i).ok_or("Missing value for --scheme")?;
                options.scheme = Some(name.clone());
            }
            "-c" | "--config" => {
                i += 1;
                let path = args.get(i).ok_or("Missing value for --config")?;
                options.config_path = Some(PathBuf::from(path));
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(Cli::Play(options))
}

/// Seed for games started without --seed
fn default_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ u64::from(std::process::id())
}

/// Log to ~/.termpong/termpong.log; the terminal belongs to the game.
fn init_logging() {
    let log_path = config::data_dir()
        .map(|dir| dir.join("termpong.log"))
        .unwrap_or_else(|| PathBuf::from("termpong.log"));

    // Create log directory if needed
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    // Open log file (append mode)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(Cli::Help) => {
            print_help();
            return;
        }
        Ok(Cli::Version) => {
            print_version();
            return;
        }
        Ok(Cli::Play(options)) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging();
    info!("termpong {} starting...", VERSION);

    if let Err(e) = run(options) {
        error!("{:#}", e);
        eprintln!("termpong: {:#}", e);
        let code = e
            .downcast_ref::<GameError>()
            .map(GameError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

/// Play one game. The terminal is restored before this returns, on every path.
fn run(options: Options) -> anyhow::Result<()> {
    let mut config = match options.config_path {
        Some(ref path) => Config::load_from(path),
        None => Config::load(),
    };
    options.apply(&mut config);
    let seed = options.seed.unwrap_or_else(default_seed);

    let (court, rows) = Renderer::playable_court()?;
    info!("Court: {:?} on {} rows", court, rows);
    info!(
        "Lives: {}, ticks/s: {}, scheme: {}, seed: {}",
        config.lives, config.ticks_per_second, config.color_scheme, seed
    );

    let mut renderer = Renderer::with_color_scheme(config.get_color_scheme());
    renderer.init().context("Failed to initialize terminal")?;
    renderer.draw_court(&court)?;

    let mut game = Game::new(&config.game_settings(seed), court, rows);
    let mut input = TerminalInput::new(KeyMapper::from_config(&config.keys));

    let end = session::run(&mut game, &mut input, &mut renderer)?;
    info!("Game finished: {:?}", end);

    let (minutes, seconds) = (game.clock().minutes(), game.clock().seconds());
    renderer.show_game_over(minutes, seconds)?;
    std::thread::sleep(GAME_OVER_HOLD);
    renderer.cleanup()?;

    println!("{}", ui::renderer::banner_text(minutes, seconds));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("termpong")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse_args(&args(&[])), Ok(Cli::Play(Options::default())));
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(&args(&["-h"])), Ok(Cli::Help));
        assert_eq!(parse_args(&args(&["--version"])), Ok(Cli::Version));
    }

    #[test]
    fn test_game_options() {
        let cli = parse_args(&args(&["-l", "5", "--ticks", "100", "--seed", "42", "--scheme", "nord"]));
        assert_eq!(
            cli,
            Ok(Cli::Play(Options {
                lives: Some(5),
                ticks: Some(100),
                seed: Some(42),
                scheme: Some("nord".to_string()),
                config_path: None,
            }))
        );
    }

    #[test]
    fn test_bad_args() {
        assert!(parse_args(&args(&["--lives"])).is_err());
        assert!(parse_args(&args(&["--lives", "many"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_options_override_config() {
        let mut config = Config::default();
        let options = Options {
            lives: Some(0),
            ticks: Some(5000),
            scheme: Some("dracula".to_string()),
            ..Options::default()
        };
        options.apply(&mut config);
        assert_eq!(config.lives, 1);
        assert_eq!(config.ticks_per_second, 1000);
        assert_eq!(config.color_scheme, "dracula");
    }
}
