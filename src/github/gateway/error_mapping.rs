//! Classification of Octocrab failures.
//!
//! Every failure ends the run, so classification only decides which
//! [`crate::KudosError`] variant the operator sees and whether the current
//! quota should be looked up before reporting it.

use http::StatusCode;

/// How a failed request is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FailureKind {
    /// The token is missing, invalid, or lacks access.
    Authentication,
    /// The request quota is spent.
    RateLimited,
    /// The request never produced an HTTP response.
    Network,
    /// Any other refusal or undecodable response.
    Api,
}

pub(super) fn classify(error: &octocrab::Error) -> FailureKind {
    match error {
        octocrab::Error::GitHub { source, .. } => classify_response(
            source.status_code,
            &source.message,
            source.documentation_url.as_deref(),
        ),
        octocrab::Error::Http { .. }
        | octocrab::Error::Hyper { .. }
        | octocrab::Error::Service { .. } => FailureKind::Network,
        _ => FailureKind::Api,
    }
}

/// GitHub answers both "bad token" and "quota spent" with 403; only the
/// message or documentation link tells them apart.
fn classify_response(
    status: StatusCode,
    message: &str,
    documentation_url: Option<&str>,
) -> FailureKind {
    let mentions_rate_limit = message.to_lowercase().contains("rate limit")
        || documentation_url.is_some_and(|url| url.contains("rate-limit"));

    match status {
        StatusCode::TOO_MANY_REQUESTS => FailureKind::RateLimited,
        StatusCode::FORBIDDEN if mentions_rate_limit => FailureKind::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FailureKind::Authentication,
        _ => FailureKind::Api,
    }
}

/// Human-readable description naming the failed operation.
pub(super) fn describe(operation: &str, error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => format!(
            "{operation} failed with status {status}: {message}",
            status = source.status_code,
            message = source.message
        ),
        _ => format!("{operation} failed: {error}"),
    }
}
