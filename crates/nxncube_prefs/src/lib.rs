//! User preferences.
//!
//! Preferences are layered: the defaults embedded in this crate, then the
//! user preferences file (if it exists), then any file given explicitly.

#[macro_use]
extern crate lazy_static;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result, WrapErr, ensure};
use nxncube_view::Palette;
use serde::{Deserialize, Serialize};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

const PREFS_FILE_NAME: &str = "nxncube-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    /// Preferences used when nothing else is configured.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
    static ref PREFS_FILE: Option<PathBuf> = user_prefs_path();
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    /// Edge length of new cubes.
    pub size: usize,
    /// Terminal background for each sticker color.
    pub palette: Palette,
    /// Whether to print each sticker's color index.
    pub show_digits: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            size: nxncube_core::DEFAULT_SIZE,
            palette: Palette::default(),
            show_digits: true,
        }
    }
}

impl Preferences {
    /// Loads preferences from the user preferences file. If loading fails,
    /// logs a warning and returns the defaults.
    pub fn load() -> Self {
        Self::build(prefs_file().ok(), None).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e:#}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Loads preferences from the user preferences file and then `path`,
    /// which must exist.
    pub fn load_with_file(path: &Path) -> Result<Self> {
        Self::build(prefs_file().ok(), Some(path))
            .wrap_err_with(|| format!("error loading preferences from {}", path.display()))
    }

    fn build(user_file: Option<&Path>, extra_file: Option<&Path>) -> Result<Self> {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = user_file {
            log::debug!("Reading user preferences from {}", path.display());
            config = config.add_source(
                config::File::from(path)
                    .format(PREFS_FILE_FORMAT)
                    .required(false),
            );
        }
        if let Some(path) = extra_file {
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }

        let prefs: Self = config.build()?.try_deserialize()?;
        ensure!(prefs.size >= 1, "cube size must be at least 1");
        Ok(prefs)
    }

    /// Writes the preferences to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }
}

/// Returns the path of the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE.as_deref().ok_or_eyre("no preferences directory")
}

fn user_prefs_path() -> Option<PathBuf> {
    match ProjectDirs::from("", "", "nxncube") {
        Some(dirs) => Some(
            dirs.config_dir()
                .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
        ),
        None => {
            log::error!("Error getting preferences directory");
            None
        }
    }
}
