//! Gateways for reading pull request participants through Octocrab.
//!
//! The [`ContributorGateway`] trait is the I/O boundary of a report run: it
//! only fetches and decodes. Filtering, fan-out and name fallback live in
//! [`crate::github::intake::ContributorIntake`], so tests can swap the
//! Octocrab implementation for a mock.

mod error_mapping;
mod pages;
mod rest;

pub use rest::OctocrabGateway;

use async_trait::async_trait;

use crate::error::KudosError;
use crate::github::locator::{PullRequestNumber, RepositoryLocator};
use crate::github::models::{Participant, PullRequestSummary};
use crate::github::search::DiscoveryCriteria;

/// Gateway that can read the data a contributor report needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContributorGateway: Send + Sync {
    /// Search for merged pull requests matching the criteria, following every
    /// result page.
    async fn search_merged_pull_requests(
        &self,
        locator: &RepositoryLocator,
        criteria: &DiscoveryCriteria,
    ) -> Result<Vec<PullRequestSummary>, KudosError>;

    /// Fetch the author of a pull request.
    async fn pull_request_author(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Option<Participant>, KudosError>;

    /// Fetch the authors of all issue (conversation) comments.
    async fn issue_commenters(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<Participant>, KudosError>;

    /// Fetch the authors of all review (diff) comments.
    async fn review_commenters(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<Participant>, KudosError>;

    /// Fetch the authors of all submitted reviews.
    async fn reviewers(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<Participant>, KudosError>;

    /// Fetch the profile display name configured for a login, if any.
    async fn display_name(&self, login: &str) -> Result<Option<String>, KudosError>;
}
