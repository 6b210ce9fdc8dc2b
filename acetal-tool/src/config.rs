use std::path::{Path, PathBuf};
use std::time::Duration;

use acetal_cal::Rgb;
use serde::Deserialize;

use crate::day_view::MAX_ROW_HEIGHT;
use crate::error::AcetError;

const DEFAULT_ROW_HEIGHT: u16 = 3;
const DEFAULT_DOUBLE_CLICK_MS: u64 = 400;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub color: Rgb,
}

impl PaletteEntry {
    fn new(name: &str, color: Rgb) -> Self {
        Self {
            name: name.to_string(),
            color,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub default_color: Rgb,
    pub row_height: u16,
    pub double_click_ms: u64,
    pub palette: Vec<PaletteEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            default_color: Rgb::WHITE,
            row_height: DEFAULT_ROW_HEIGHT,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            palette: default_palette(),
        }
    }
}

fn default_palette() -> Vec<PaletteEntry> {
    vec![
        PaletteEntry::new("White", Rgb::WHITE),
        PaletteEntry::new("Red", Rgb::new(0xe0, 0x4f, 0x4f)),
        PaletteEntry::new("Orange", Rgb::new(0xf0, 0x9a, 0x3e)),
        PaletteEntry::new("Yellow", Rgb::new(0xf2, 0xd9, 0x4e)),
        PaletteEntry::new("Green", Rgb::new(0x5c, 0xb8, 0x5c)),
        PaletteEntry::new("Teal", Rgb::new(0x3a, 0xa7, 0xa3)),
        PaletteEntry::new("Blue", Rgb::new(0x33, 0x99, 0xff)),
        PaletteEntry::new("Purple", Rgb::new(0x8e, 0x6c, 0xd1)),
        PaletteEntry::new("Gray", Rgb::new(0x9e, 0x9e, 0x9e)),
    ]
}

/// Settings the UI reads while running.
#[derive(Debug, Clone)]
pub struct UiSettings {
    pub row_height: u16,
    pub double_click: Duration,
    pub default_color: Rgb,
    pub palette: Vec<PaletteEntry>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Config::default().ui_settings()
    }
}

impl Config {
    pub fn ui_settings(&self) -> UiSettings {
        let palette = if self.palette.is_empty() {
            default_palette()
        } else {
            self.palette.clone()
        };

        UiSettings {
            row_height: self.row_height.clamp(1, MAX_ROW_HEIGHT),
            double_click: Duration::from_millis(self.double_click_ms),
            default_color: self.default_color,
            palette,
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("acetal").join("config.toml"))
}

pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("acetal")
        .join("acet.log")
}

/// Loads the config from `explicit`, or from the default location.
///
/// A missing default file yields defaults; a missing explicit file is an
/// error. An existing file that does not parse is always an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, AcetError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AcetError::ConfigNotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    parse_config_file(&path)
}

fn parse_config_file(path: &Path) -> Result<Config, AcetError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AcetError::Config {
        path: path.to_path_buf(),
        source,
    })
}
