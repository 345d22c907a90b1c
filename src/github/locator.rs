//! Repository identifiers and identity wrappers for GitHub access.

use std::fmt;

use crate::error::KudosError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    fn new(value: &str, identifier: &str) -> Result<Self, KudosError> {
        if value.is_empty() {
            return Err(invalid_repository(identifier));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(String);

impl RepositoryName {
    fn new(value: &str, identifier: &str) -> Result<Self, KudosError> {
        if value.is_empty() {
            return Err(invalid_repository(identifier));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number, unique within one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Wraps a pull request number, rejecting zero.
    #[must_use]
    pub const fn new(value: u64) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PullRequestNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `KudosError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, KudosError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(KudosError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}

fn invalid_repository(identifier: &str) -> KudosError {
    KudosError::InvalidRepository {
        value: identifier.to_owned(),
    }
}

/// A repository to collect contributors from.
///
/// # Example
///
/// ```
/// use kudos::github::locator::RepositoryLocator;
///
/// let locator = RepositoryLocator::parse("withastro/docs")
///     .expect("should parse owner/name");
/// assert_eq!(locator.to_string(), "withastro/docs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Parses an `owner/name` identifier.
    ///
    /// # Errors
    ///
    /// Returns `KudosError::InvalidRepository` when the identifier does not
    /// have exactly two non-empty segments.
    pub fn parse(identifier: &str) -> Result<Self, KudosError> {
        let trimmed = identifier.trim();
        let mut segments = trimmed.split('/');
        let owner_segment = segments
            .next()
            .ok_or_else(|| invalid_repository(trimmed))?;
        let name_segment = segments
            .next()
            .ok_or_else(|| invalid_repository(trimmed))?;
        if segments.next().is_some() {
            return Err(invalid_repository(trimmed));
        }

        Ok(Self {
            owner: RepositoryOwner::new(owner_segment, trimmed)?,
            repository: RepositoryName::new(name_segment, trimmed)?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    pub(crate) fn pull_request_path(&self, number: PullRequestNumber) -> String {
        format!(
            "/repos/{}/{}/pulls/{}",
            self.owner.as_str(),
            self.repository.as_str(),
            number.get()
        )
    }

    pub(crate) fn issue_comments_path(&self, number: PullRequestNumber) -> String {
        format!(
            "/repos/{}/{}/issues/{}/comments",
            self.owner.as_str(),
            self.repository.as_str(),
            number.get()
        )
    }

    pub(crate) fn review_comments_path(&self, number: PullRequestNumber) -> String {
        format!("{}/comments", self.pull_request_path(number))
    }

    pub(crate) fn reviews_path(&self, number: PullRequestNumber) -> String {
        format!("{}/reviews", self.pull_request_path(number))
    }
}

impl fmt::Display for RepositoryLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner.as_str(), self.repository.as_str())
    }
}
