//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.trendfeed.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `TRENDFEED_LANGUAGE`, `TRENDFEED_TOKEN`, or
//!    legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--language`/`-l`, `--token`/`-t`, and so on
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! language = "rust"
//! date_jump = "month"
//! view_type = "list"
//! pages = 3
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::feed::{DateJump, Preference, PreferenceOptions, ViewType};
use crate::github::error::FeedError;
use crate::github::gateway::DEFAULT_PER_PAGE;
use crate::github::locator::{ApiBase, GITHUB_API_BASE};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print a fixed number of windows and exit.
    Listing,
    /// Browse the feed interactively.
    Tui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use trendfeed::TrendfeedConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = TrendfeedConfig::load().expect("failed to load configuration");
/// let preference = config.preference().expect("valid preference");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TRENDFEED",
    discovery(
        dotfile_name = ".trendfeed.toml",
        config_file_name = "trendfeed.toml",
        app_name = "trendfeed"
    )
)]
pub struct TrendfeedConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Optional: anonymous searches work but hit the rate limit sooner.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `TRENDFEED_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Language filter, for example `rust` or `typescript`.
    ///
    /// Can be provided via:
    /// - CLI: `--language <LANG>` or `-l <LANG>`
    /// - Environment: `TRENDFEED_LANGUAGE`
    /// - Config file: `language = "..."`
    #[ortho_config(cli_short = 'l')]
    pub language: Option<String>,

    /// Width of each window: `day`, `week`, `month`, or `year`.
    #[ortho_config(cli_short = 'd')]
    pub date_jump: String,

    /// Layout: `grid` or `list`.
    #[ortho_config(cli_short = 'v')]
    pub view_type: String,

    /// Number of windows printed in listing mode.
    #[ortho_config(cli_short = 'p')]
    pub pages: u32,

    /// Repositories requested per window (1 to 100).
    #[ortho_config()]
    pub per_page: u8,

    /// GitHub API base URL, for GitHub Enterprise or testing.
    #[ortho_config()]
    pub api_base: String,

    /// Emits telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,

    /// Enables the interactive TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,
}

const DEFAULT_PAGES: u32 = 1;

impl Default for TrendfeedConfig {
    fn default() -> Self {
        Self {
            token: None,
            language: None,
            date_jump: DateJump::default().as_str().to_owned(),
            view_type: ViewType::default().as_str().to_owned(),
            pages: DEFAULT_PAGES,
            per_page: DEFAULT_PER_PAGE,
            api_base: GITHUB_API_BASE.to_owned(),
            telemetry: false,
            tui: false,
        }
    }
}

impl TrendfeedConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// Blank values count as absent.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
    }

    /// Builds the initial feed preferences.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidDateJump`] or [`FeedError::InvalidViewType`]
    /// when the configured strings are not recognised.
    pub fn preference(&self) -> Result<Preference, FeedError> {
        Ok(Preference {
            language: self
                .language
                .as_deref()
                .map(str::trim)
                .filter(|language| !language.is_empty())
                .map(ToOwned::to_owned),
            date_jump: self.date_jump.parse()?,
            view_type: self.view_type.parse()?,
            options: PreferenceOptions {
                token: self.resolve_token(),
            },
        })
    }

    /// Parses the configured API base.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] when the value is not an HTTP(S) URL.
    pub fn api_base(&self) -> Result<ApiBase, FeedError> {
        ApiBase::parse(&self.api_base)
    }

    /// Returns the number of windows to list.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Configuration`] when zero pages are requested.
    pub fn require_pages(&self) -> Result<u32, FeedError> {
        if self.pages == 0 {
            return Err(FeedError::Configuration {
                message: "pages must be at least 1 (use --pages or -p)".to_owned(),
            });
        }
        Ok(self.pages)
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::Tui
        } else {
            OperationMode::Listing
        }
    }
}

#[cfg(test)]
mod tests;
