//! Search criteria for discovering merged pull requests.

use chrono::{DateTime, SecondsFormat, Utc};

use super::locator::RepositoryLocator;

/// The merge-date range a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeWindow {
    since: DateTime<Utc>,
    until: DateTime<Utc>,
}

impl MergeWindow {
    /// Creates a window from `since` up to `until`.
    #[must_use]
    pub const fn new(since: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self { since, until }
    }

    /// Start of the window.
    #[must_use]
    pub const fn since(&self) -> DateTime<Utc> {
        self.since
    }

    /// End of the window.
    #[must_use]
    pub const fn until(&self) -> DateTime<Utc> {
        self.until
    }
}

/// What makes a pull request a discovery candidate in one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryCriteria {
    /// Branch the pull request must have been merged into.
    pub base_branch: String,
    /// Merge-date range.
    pub window: MergeWindow,
}

impl DiscoveryCriteria {
    /// Builds the `q` parameter for `/search/issues`.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use kudos::github::locator::RepositoryLocator;
    /// use kudos::github::search::{DiscoveryCriteria, MergeWindow};
    ///
    /// let locator = RepositoryLocator::parse("octo/repo")
    ///     .expect("should parse");
    /// let criteria = DiscoveryCriteria {
    ///     base_branch: "main".to_owned(),
    ///     window: MergeWindow::new(
    ///         Utc.with_ymd_and_hms(2026, 1, 29, 11, 7, 19).single().expect("valid date"),
    ///         Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).single().expect("valid date"),
    ///     ),
    /// };
    /// assert_eq!(
    ///     criteria.search_terms(&locator),
    ///     "repo:octo/repo is:pr is:merged base:main \
    ///      merged:2026-01-29T11:07:19.000Z..2026-03-01T00:00:00.000Z"
    /// );
    /// ```
    #[must_use]
    pub fn search_terms(&self, locator: &RepositoryLocator) -> String {
        format!(
            "repo:{locator} is:pr is:merged base:{branch} merged:{since}..{until}",
            branch = self.base_branch,
            since = format_timestamp(self.window.since),
            until = format_timestamp(self.window.until),
        )
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
