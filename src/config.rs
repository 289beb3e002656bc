//! Configuration and color scheme management for termpong.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.termpong/config.toml`
//! - Key bindings for the paddle and quit commands
//! - Built-in color schemes (default, mono, solarized-dark, nord, dracula)
//!
//! # Configuration File
//!
//! ```toml
//! # Serves per game
//! lives = 3
//!
//! # Timer rate; ball speeds are counted in ticks
//! ticks_per_second = 50
//!
//! # Color scheme: default, mono, solarized-dark, nord, dracula
//! color_scheme = "nord"
//!
//! [keys]
//! up = ["k", "Up"]
//! down = ["m", "Down"]
//! quit = ["Q", "Esc"]
//!
//! [symbols]
//! ball = "O"
//! paddle = "#"
//! ```
//!
//! A missing or unreadable file falls back to the defaults shown above.

use std::fs;
use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::GameSettings;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Serves available per game
    pub lives: u32,
    /// Timer ticks per second
    pub ticks_per_second: u32,
    /// Color scheme name
    pub color_scheme: String,
    /// Key bindings
    pub keys: KeyConfig,
    /// Piece symbols
    pub symbols: SymbolConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lives: 3,
            ticks_per_second: 50,
            color_scheme: "default".to_string(),
            keys: KeyConfig::default(),
            symbols: SymbolConfig::default(),
        }
    }
}

/// Key binding configuration. Each entry is a single character or a key
/// name (`Up`, `Down`, `Left`, `Right`, `Esc`, `Enter`, `Space`, `Tab`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            up: vec!["k".to_string(), "Up".to_string()],
            down: vec!["m".to_string(), "Down".to_string()],
            quit: vec!["Q".to_string(), "Esc".to_string()],
        }
    }
}

/// Symbols used to draw the pieces
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    pub ball: char,
    pub paddle: char,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            ball: 'O',
            paddle: '#',
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                warn!("Failed to read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse configuration text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content).map(Config::sanitized)
    }

    /// Clamp values that would make the game unplayable
    fn sanitized(mut self) -> Self {
        self.lives = self.lives.max(1);
        self.ticks_per_second = self.ticks_per_second.clamp(1, 1000);
        self
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join("config.toml"))
    }

    /// Settings for one game with the given serve seed
    pub fn game_settings(&self, seed: u64) -> GameSettings {
        GameSettings {
            lives: self.lives,
            ticks_per_second: self.ticks_per_second,
            ball_symbol: self.symbols.ball,
            paddle_symbol: self.symbols.paddle,
            seed,
        }
    }

    /// Get the color scheme
    pub fn get_color_scheme(&self) -> ColorScheme {
        ColorScheme::by_name(&self.color_scheme)
    }
}

/// Parse a key binding entry
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(ch));
    }
    match name.to_lowercase().as_str() {
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "space" => Some(KeyCode::Char(' ')),
        "tab" => Some(KeyCode::Tab),
        _ => None,
    }
}

/// Color definition (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to crossterm Color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Color scheme definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,

    // Court walls
    pub border: Color,

    // Ball and paddle
    pub piece: Color,

    // Lives and clock line
    pub status: Color,

    // Game-over banner (drawn in reverse video)
    pub banner: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_scheme()
    }
}

impl ColorScheme {
    /// Default color scheme
    pub fn default_scheme() -> Self {
        Self {
            name: "default".to_string(),
            border: Color::new(180, 180, 180),
            piece: Color::new(255, 255, 255),
            status: Color::new(100, 150, 255),
            banner: Color::new(255, 255, 255),
        }
    }

    /// Plain white on the terminal background
    pub fn mono() -> Self {
        Self {
            name: "mono".to_string(),
            border: Color::new(255, 255, 255),
            piece: Color::new(255, 255, 255),
            status: Color::new(255, 255, 255),
            banner: Color::new(255, 255, 255),
        }
    }

    /// Solarized Dark scheme
    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".to_string(),
            border: Color::new(88, 110, 117),
            piece: Color::new(181, 137, 0),
            status: Color::new(38, 139, 210),
            banner: Color::new(253, 246, 227),
        }
    }

    /// Nord scheme
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            border: Color::new(76, 86, 106),
            piece: Color::new(136, 192, 208),
            status: Color::new(163, 190, 140),
            banner: Color::new(236, 239, 244),
        }
    }

    /// Dracula scheme
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            border: Color::new(98, 114, 164),
            piece: Color::new(80, 250, 123),
            status: Color::new(189, 147, 249),
            banner: Color::new(248, 248, 242),
        }
    }

    /// Get scheme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "mono" | "monochrome" => Self::mono(),
            "solarized-dark" | "solarized_dark" | "solarized" => Self::solarized_dark(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            _ => Self::default_scheme(),
        }
    }

    /// List available schemes
    pub fn list() -> Vec<&'static str> {
        vec!["default", "mono", "solarized-dark", "nord", "dracula"]
    }
}

/// Per-user directory for the config file and the log
pub fn data_dir() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".termpong"))
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
