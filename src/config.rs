use std::fs;
use std::io;
use std::path::PathBuf;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

fn default_year_span() -> u32 {
    50
}

/// Declarative style overrides. Values are color names ("cyan") or hex
/// ("#8cd0f5"); unknown values fall back to the built-in palette.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeOverrides {
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub selected: Option<String>,
    #[serde(default)]
    pub disabled: Option<String>,
    #[serde(default)]
    pub weekend: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The year selector covers current year +/- this span.
    #[serde(default = "default_year_span")]
    pub year_span: u32,
    #[serde(default)]
    pub theme: ThemeOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            year_span: default_year_span(),
            theme: ThemeOverrides::default(),
        }
    }
}

impl Config {
    pub fn load() -> io::Result<Self> {
        Self::load_from(get_config_path())
    }

    pub fn load_from(path: PathBuf) -> io::Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        } else {
            Ok(Config::default())
        }
    }

    pub fn init() -> io::Result<bool> {
        let path = get_config_path();
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, "")?;
        Ok(true)
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("sundial")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Parse a color override; `None` when the value isn't recognized.
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    match value.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        _ => None,
    }
}
