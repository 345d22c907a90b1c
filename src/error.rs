//! Error types shared by configuration, GitHub access, and report output.

use thiserror::Error;

use crate::github::rate_limit::RateLimitInfo;

/// Errors surfaced while configuring a run or communicating with GitHub.
///
/// Every variant is fatal for the current run: the report is only written
/// after all repositories have been processed successfully.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KudosError {
    /// The authentication token was missing.
    #[error("personal access token is required (use --token or GITHUB_TOKEN)")]
    MissingToken,

    /// No since date was configured for the selected release mode.
    #[error("a since date is required (use {flag})")]
    MissingSinceDate {
        /// Flag or config key that supplies the missing date.
        flag: String,
    },

    /// The repository list was empty.
    #[error("at least one repository is required (use --repos owner/name)")]
    NoRepositories,

    /// A repository identifier did not match `owner/name`.
    #[error("repository must be written as owner/name: {value}")]
    InvalidRepository {
        /// The rejected identifier.
        value: String,
    },

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// A configured date could not be parsed.
    #[error("{field} is not an RFC 2822 or RFC 3339 date: {value}")]
    InvalidDate {
        /// Name of the configuration field.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// Major release mode is missing a branch for a repository.
    #[error("no major release branch configured for {repository}")]
    MissingReleaseBranch {
        /// Repository in `owner/name` form.
        repository: String,
    },

    /// A major release branch entry did not match `owner/name=branch`.
    #[error("major release branch must be written as owner/name=branch: {value}")]
    InvalidReleaseBranch {
        /// The rejected entry.
        value: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if it could be fetched after the failure.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
