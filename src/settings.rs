//! Persisted mode preferences
//!
//! Three flags live in a small TOML file under the user's config
//! directory. A missing file means every mode is off; a file that fails to
//! parse is reported and ignored rather than stopping the game.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "console-wordle";
const FILE_NAME: &str = "modes.toml";

/// A toggleable mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reveal the target and raw feedback
    Debug,
    /// Later guesses must respect earlier feedback
    Hard,
    /// Bold colors
    Contrast,
}

impl Mode {
    pub const ALL: [Self; 3] = [Self::Debug, Self::Hard, Self::Contrast];

    /// Parse a mode name as typed at the menu ("hard" or "hard mode")
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let name = input.trim().to_lowercase();
        let name = name.strip_suffix(" mode").unwrap_or(&name);
        match name {
            "debug" => Some(Self::Debug),
            "hard" => Some(Self::Hard),
            "contrast" => Some(Self::Contrast),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Hard => "hard",
            Self::Contrast => "contrast",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Debug => "shows the hidden word and raw feedback",
            Self::Hard => "later guesses must use every revealed hint",
            Self::Contrast => "bold colors",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mode", self.name())
    }
}

/// The persisted flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub debug: bool,
    pub hard: bool,
    pub contrast: bool,
}

impl Preferences {
    #[must_use]
    pub const fn get(&self, mode: Mode) -> bool {
        match mode {
            Mode::Debug => self.debug,
            Mode::Hard => self.hard,
            Mode::Contrast => self.contrast,
        }
    }

    pub const fn set(&mut self, mode: Mode, enabled: bool) {
        match mode {
            Mode::Debug => self.debug = enabled,
            Mode::Hard => self.hard = enabled,
            Mode::Contrast => self.contrast = enabled,
        }
    }

    /// Flip a mode and return its new value
    pub fn toggle(&mut self, mode: Mode) -> bool {
        let enabled = !self.get(mode);
        self.set(mode, enabled);
        debug!("{mode} toggled to {enabled}");
        enabled
    }
}

/// Where preferences are read from and written to
///
/// A store without a path (no config directory on this platform) keeps
/// preferences in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

impl PreferenceStore {
    /// The default location, `<config dir>/console-wordle/modes.toml`
    #[must_use]
    pub fn default_location() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME)),
        }
    }

    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    #[must_use]
    pub const fn in_memory() -> Self {
        Self { path: None }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read preferences, falling back to defaults when absent or unreadable
    #[must_use]
    pub fn load(&self) -> Preferences {
        let Some(path) = &self.path else {
            return Preferences::default();
        };
        if !path.exists() {
            debug!("no preference file at {}", path.display());
            return Preferences::default();
        }
        match Self::read(path) {
            Ok(prefs) => {
                info!("loaded preferences from {}", path.display());
                prefs
            }
            Err(err) => {
                warn!("ignoring preference file: {err:#}");
                Preferences::default()
            }
        }
    }

    /// Write preferences, creating the parent directory if needed
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(prefs).context("failed to serialize preferences")?;
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
        debug!("saved preferences to {}", path.display());
        Ok(())
    }

    fn read(path: &Path) -> Result<Preferences> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}
