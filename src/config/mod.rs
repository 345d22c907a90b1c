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
//! 2. **Configuration file** – `.kudos.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `KUDOS_SINCE`, `KUDOS_TOKEN`, or legacy
//!    `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--since`/`-s`, `--repos`/`-r`, and so on
//!
//! # Configuration File
//!
//! ```toml
//! since = "Thu, 29 Jan 2026 03:07:19 -0800"
//! repos = ["withastro/astro", "withastro/docs"]
//! ignored_logins = ["astrobot-houston", "dependabot[bot]"]
//! core_team_logins = ["matthewp"]
//! output = "result.md"
//!
//! major_since = "Tue, 3 Dec 2024 02:56:34 -0800"
//! major_branches = ["withastro/astro=next", "withastro/docs=v5"]
//! ```

use std::collections::HashMap;
use std::env;

use camino::Utf8Path;
use chrono::{DateTime, Utc};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::contributors::{EligibilityFilter, RepositoryPlan};
use crate::error::KudosError;
use crate::github::{DiscoveryCriteria, MergeWindow, PersonalAccessToken, RepositoryLocator};

/// Which set of pull requests a run reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMode {
    /// Pull requests merged into the trunk branch since `since`.
    Regular,
    /// Pull requests merged into each repository's next-major branch since
    /// `major_since`.
    Major,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `KUDOS_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `KUDOS_SINCE` or `--since`: Start of the merge window
/// - `KUDOS_OUTPUT` or `--output`: Report file path
///
/// # Example
///
/// ```no_run
/// use kudos::KudosConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = KudosConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// let plans = config
///     .repository_plans(chrono::Utc::now())
///     .expect("repositories and since date required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "KUDOS",
    discovery(
        dotfile_name = ".kudos.toml",
        config_file_name = "kudos.toml",
        app_name = "kudos"
    )
)]
pub struct KudosConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `KUDOS_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// GitHub REST API base URL.
    ///
    /// Defaults to `https://api.github.com`. GitHub Enterprise Server
    /// installations use `https://<host>/api/v3`.
    #[ortho_config(cli_short = 'a')]
    pub api_base: String,

    /// Start of the merge window as an RFC 2822 or RFC 3339 date.
    ///
    /// Can be provided via:
    /// - CLI: `--since <DATE>` or `-s <DATE>`
    /// - Environment: `KUDOS_SINCE`
    /// - Config file: `since = "..."`
    #[ortho_config(cli_short = 's')]
    pub since: Option<String>,

    /// Repositories to scan, as `owner/name`, in processing order.
    #[ortho_config(cli_short = 'r')]
    pub repos: Vec<String>,

    /// Trunk branch pull requests must be merged into outside major mode.
    #[ortho_config(cli_short = 'b')]
    pub base_branch: String,

    /// Logins excluded from discovery and from the report, typically bots
    /// that are not typed as bots by GitHub.
    #[ortho_config(cli_short = 'i')]
    pub ignored_logins: Vec<String>,

    /// Maintainer logins excluded from the report. Their pull requests are
    /// still scanned for other participants.
    #[ortho_config(cli_short = 'c')]
    pub core_team_logins: Vec<String>,

    /// Reports on the upcoming major release instead of trunk.
    ///
    /// Can be provided via:
    /// - CLI: `--major` / `-m`
    /// - Config file: `major = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config(cli_short = 'm')]
    pub major: bool,

    /// Start of the merge window in major mode, usually the date of the last
    /// major release.
    #[ortho_config(cli_short = 'S')]
    pub major_since: Option<String>,

    /// Next-major branch for every repository, as `owner/name=branch`.
    #[ortho_config(cli_short = 'B')]
    pub major_branches: Vec<String>,

    /// Path of the report file, overwritten on every successful run.
    #[ortho_config(cli_short = 'o')]
    pub output: String,
}

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_BASE_BRANCH: &str = "main";
const DEFAULT_OUTPUT: &str = "result.md";

impl Default for KudosConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            since: None,
            repos: Vec::new(),
            base_branch: DEFAULT_BASE_BRANCH.to_owned(),
            ignored_logins: Vec::new(),
            core_team_logins: Vec::new(),
            major: false,
            major_since: None,
            major_branches: Vec::new(),
            output: DEFAULT_OUTPUT.to_owned(),
        }
    }
}

impl KudosConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`KudosError::MissingToken`] when no token source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, KudosError> {
        let value = self
            .token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(KudosError::MissingToken)?;
        PersonalAccessToken::new(value)
    }

    /// Returns the validated REST API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`KudosError::InvalidUrl`] when the value is not an absolute
    /// `http` or `https` URL.
    pub fn api_base(&self) -> Result<Url, KudosError> {
        let url = Url::parse(self.api_base.trim())
            .map_err(|error| KudosError::InvalidUrl(format!("{}: {error}", self.api_base)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(KudosError::InvalidUrl(format!(
                "{}: unsupported scheme {scheme}",
                self.api_base
            ))),
        }
    }

    /// Determines the release mode from the `major` flag.
    #[must_use]
    pub const fn release_mode(&self) -> ReleaseMode {
        if self.major {
            ReleaseMode::Major
        } else {
            ReleaseMode::Regular
        }
    }

    /// Parses the configured repositories, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`KudosError::NoRepositories`] when the list is empty, or
    /// [`KudosError::InvalidRepository`] for the first malformed entry.
    pub fn repositories(&self) -> Result<Vec<RepositoryLocator>, KudosError> {
        if self.repos.is_empty() {
            return Err(KudosError::NoRepositories);
        }
        self.repos
            .iter()
            .map(|identifier| RepositoryLocator::parse(identifier))
            .collect()
    }

    /// Returns the start of the merge window for the current release mode.
    ///
    /// # Errors
    ///
    /// Returns [`KudosError::MissingSinceDate`] when the relevant date is not
    /// configured, or [`KudosError::InvalidDate`] when it cannot be parsed.
    pub fn since_date(&self) -> Result<DateTime<Utc>, KudosError> {
        let (field, flag, configured) = match self.release_mode() {
            ReleaseMode::Regular => ("since", "--since", self.since.as_deref()),
            ReleaseMode::Major => ("major_since", "--major-since", self.major_since.as_deref()),
        };
        let value = configured.ok_or_else(|| KudosError::MissingSinceDate {
            flag: flag.to_owned(),
        })?;
        parse_date(field, value)
    }

    /// Builds the eligibility filter from the ignored and core-team lists.
    #[must_use]
    pub fn eligibility_filter(&self) -> EligibilityFilter {
        EligibilityFilter::new(
            self.ignored_logins.iter().map(String::as_str),
            self.core_team_logins.iter().map(String::as_str),
        )
    }

    /// Builds one discovery plan per repository, ending the merge window at
    /// `until`.
    ///
    /// In major mode every repository must have an entry in
    /// `major_branches`; this is checked here so a misconfigured run fails
    /// before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns the repository and date errors of [`Self::repositories`] and
    /// [`Self::since_date`], [`KudosError::InvalidReleaseBranch`] for a
    /// malformed `major_branches` entry, and
    /// [`KudosError::MissingReleaseBranch`] for a repository without one.
    pub fn repository_plans(
        &self,
        until: DateTime<Utc>,
    ) -> Result<Vec<RepositoryPlan>, KudosError> {
        let repositories = self.repositories()?;
        let window = MergeWindow::new(self.since_date()?, until);

        let release_branches = match self.release_mode() {
            ReleaseMode::Regular => HashMap::new(),
            ReleaseMode::Major => parse_release_branches(&self.major_branches)?,
        };

        repositories
            .into_iter()
            .map(|locator| {
                let base_branch = match self.release_mode() {
                    ReleaseMode::Regular => self.base_branch.clone(),
                    ReleaseMode::Major => release_branches
                        .get(&locator)
                        .cloned()
                        .ok_or_else(|| KudosError::MissingReleaseBranch {
                            repository: locator.to_string(),
                        })?,
                };
                Ok(RepositoryPlan {
                    locator,
                    criteria: DiscoveryCriteria {
                        base_branch,
                        window,
                    },
                })
            })
            .collect()
    }

    /// Path of the report file.
    #[must_use]
    pub fn output_path(&self) -> &Utf8Path {
        Utf8Path::new(&self.output)
    }
}

fn parse_date(field: &str, value: &str) -> Result<DateTime<Utc>, KudosError> {
    let trimmed = value.trim();
    DateTime::parse_from_rfc2822(trimmed)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed))
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| KudosError::InvalidDate {
            field: field.to_owned(),
            value: value.to_owned(),
        })
}

fn parse_release_branches(
    entries: &[String],
) -> Result<HashMap<RepositoryLocator, String>, KudosError> {
    entries
        .iter()
        .map(|entry| {
            let invalid = || KudosError::InvalidReleaseBranch {
                value: entry.clone(),
            };
            let (repository, raw_branch) = entry.split_once('=').ok_or_else(invalid)?;
            let branch = raw_branch.trim();
            if branch.is_empty() {
                return Err(invalid());
            }
            let locator = RepositoryLocator::parse(repository).map_err(|_| invalid())?;
            Ok((locator, branch.to_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests;
