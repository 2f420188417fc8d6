//! Relay configuration.
//!
//! Configuration is a TOML document. Every section is optional:
//!
//! ```toml
//! [logging]
//! filter = "info,trackbot=debug"
//!
//! [report]
//! title_template = "Tasks of {{ name }} ({{ generated_at }})"
//!
//! [replies]
//! not_authorized = "Please sign in with /start first."
//!
//! [output]
//! directory = "reports"
//!
//! [[directory.users]]
//! name = "Ivan Petrov"
//! tasks = [{ id = 1, status = "open" }, { id = 2, status = "resolved" }]
//! ```
//!
//! The `directory` section seeds the in-memory tracker used by the console
//! relay.

use std::collections::BTreeSet;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use minijinja::Environment;
use serde::Deserialize;
use thiserror::Error;

use crate::conversation::domain::{ReplyTemplateError, Replies};
use crate::report::services::DEFAULT_TITLE_TEMPLATE;
use crate::tracker::{adapters::memory::InMemoryIssueTracker, domain::Issue};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Read {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid TOML for [`RelayConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A reply template does not parse.
    #[error(transparent)]
    Reply(#[from] ReplyTemplateError),

    /// The report title template does not parse.
    #[error("report title template is invalid: {0}")]
    TitleTemplate(String),

    /// A directory user entry is invalid.
    #[error("invalid directory user: {0}")]
    InvalidUser(String),
}

/// Top-level relay configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelayConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Report settings.
    pub report: ReportConfig,
    /// Reply templates.
    pub replies: Replies,
    /// Known users and their tasks.
    pub directory: DirectoryConfig,
    /// Output settings for the console relay.
    pub output: OutputConfig,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

/// Report settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Title template; receives `name` and `generated_at`.
    pub title_template: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title_template: DEFAULT_TITLE_TEMPLATE.to_owned(),
        }
    }
}

/// Known users served by the in-memory tracker.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoryConfig {
    /// User entries.
    pub users: Vec<DirectoryUser>,
}

/// One known user.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryUser {
    /// Full name as the user types it.
    pub name: String,
    /// Issues assigned to the user.
    #[serde(default)]
    pub tasks: Vec<Issue>,
}

/// Output settings for the console relay.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving rendered reports. Images are only described when
    /// unset.
    pub directory: Option<Utf8PathBuf>,
}

impl RelayConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or is invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_owned(),
            source,
        };
        let file_name = path.file_name().ok_or_else(|| {
            read_error(std::io::Error::other("path must include a file name"))
        })?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let document = dir.read_to_string(file_name).map_err(read_error)?;
        tracing::debug!(%path, "configuration read");
        Self::from_toml_str(&document)
    }

    /// Checks templates and directory entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.replies.validate()?;
        Environment::new()
            .template_from_str(&self.report.title_template)
            .map_err(|error| ConfigError::TitleTemplate(error.to_string()))?;

        let mut seen = BTreeSet::new();
        for user in &self.directory.users {
            let name = user.name.trim();
            if name.is_empty() {
                return Err(ConfigError::InvalidUser("name must not be empty".to_owned()));
            }
            if name != user.name {
                return Err(ConfigError::InvalidUser(format!(
                    "name '{}' has surrounding whitespace",
                    user.name
                )));
            }
            if !seen.insert(name) {
                return Err(ConfigError::InvalidUser(format!("duplicate name '{name}'")));
            }
        }
        Ok(())
    }

    /// Builds an in-memory tracker holding the configured users.
    #[must_use]
    pub fn seeded_tracker(&self) -> InMemoryIssueTracker {
        let tracker = InMemoryIssueTracker::new();
        for user in &self.directory.users {
            tracker.add_user(user.name.clone(), user.tasks.iter().cloned());
        }
        tracker
    }
}
