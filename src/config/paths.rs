use std::{
    env,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

/// Utility struct for locating configuration and data directories
///
/// Follows the XDG Base Directory specification
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory path for the application
    ///
    /// - `HEARTH_CONFIG_HOME` wins when set
    /// - Otherwise checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "hearth" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        if let Ok(explicit) = env::var("HEARTH_CONFIG_HOME") {
            return Ok(PathBuf::from(explicit));
        }

        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join("hearth"))
    }

    /// Returns the application data directory path
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if HOME environment variable is not set or directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        let data_dir = env::var("HOME")
            .map(|home| format!("{home}/.hearth"))
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        let app_dir = PathBuf::from(data_dir);

        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir)
    }

    /// Get the application log directory
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::app_data_dir()?.join("logs");

        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }
}

/// Directory roots that path and command templates may refer to.
///
/// Built once at process start and handed to the template resolver and the
/// source loader. The builtin variables it exposes are `home`,
/// `config_home`, `theme`/`theme_home`, `rofi_home` and `scripts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    home: PathBuf,
    config_home: PathBuf,
}

impl PathContext {
    /// Creates a context from an explicit home and configuration root.
    pub fn new(home: impl Into<PathBuf>, config_home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            config_home: config_home.into(),
        }
    }

    /// Creates a context whose configuration root is `<home>/.config/hearth`.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let config_home = home.join(".config").join("hearth");
        Self::new(home, config_home)
    }

    /// Creates a context from the process environment.
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be determined
    pub fn from_env() -> Result<Self, Error> {
        let config_home = ConfigPaths::config_dir()?;
        let home = env::var("HOME")
            .map(PathBuf::from)
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        Ok(Self::new(home, config_home))
    }

    /// The user's home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory holding the layered source documents.
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    /// Directory holding theme documents.
    pub fn theme_home(&self) -> PathBuf {
        self.config_home.join("themes")
    }

    /// Directory holding rofi menu assets.
    pub fn rofi_home(&self) -> PathBuf {
        self.config_home.join("rofi")
    }

    /// Directory holding helper scripts.
    pub fn scripts(&self) -> PathBuf {
        self.config_home.join("scripts")
    }

    /// Builtin template variables derived from this context.
    pub fn variables(&self) -> IndexMap<String, String> {
        let theme_home = display(&self.theme_home());

        IndexMap::from([
            ("home".to_string(), display(&self.home)),
            ("config_home".to_string(), display(&self.config_home)),
            ("theme".to_string(), theme_home.clone()),
            ("theme_home".to_string(), theme_home),
            ("rofi_home".to_string(), display(&self.rofi_home())),
            ("scripts".to_string(), display(&self.scripts())),
        ])
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
