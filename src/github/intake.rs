//! High-level contributor queries built on a [`ContributorGateway`].

use crate::contributors::eligibility::EligibilityFilter;
use crate::error::KudosError;

use super::gateway::ContributorGateway;
use super::locator::{PullRequestNumber, RepositoryLocator};
use super::models::PullRequestParticipants;
use super::search::DiscoveryCriteria;

/// Answers the three questions a report run asks GitHub.
pub struct ContributorIntake<'client, Gateway>
where
    Gateway: ContributorGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ContributorIntake<'client, Gateway>
where
    Gateway: ContributorGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Lists merged pull requests whose author qualifies.
    ///
    /// Pull requests by bots, by ignored logins, or by deleted accounts are
    /// dropped. Core-team authors are kept: their pull requests can still
    /// surface external reviewers and commenters.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn find_qualifying_pull_request_numbers(
        &self,
        locator: &RepositoryLocator,
        criteria: &DiscoveryCriteria,
        filter: &EligibilityFilter,
    ) -> Result<Vec<PullRequestNumber>, KudosError> {
        let summaries = self
            .client
            .search_merged_pull_requests(locator, criteria)
            .await?;

        Ok(summaries
            .into_iter()
            .filter_map(|summary| {
                let qualifies = summary
                    .author
                    .as_ref()
                    .is_some_and(|author| filter.is_qualifying_pr_author(author));
                if !qualifies {
                    tracing::debug!("skipping {locator}{}: author does not qualify", summary.number);
                }
                qualifies.then_some(summary.number)
            })
            .collect())
    }

    /// Loads the author and every commenter, review commenter and reviewer of
    /// one pull request.
    ///
    /// The four reads are independent and run concurrently; commenters are
    /// merged in a fixed order (issue comments, review comments, reviews)
    /// regardless of which response arrives first.
    ///
    /// # Errors
    ///
    /// Fails with the first gateway error.
    pub async fn fetch_pull_request_participants(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<PullRequestParticipants, KudosError> {
        let (author, issue_commenters, review_commenters, reviewers) = tokio::try_join!(
            self.client.pull_request_author(locator, number),
            self.client.issue_commenters(locator, number),
            self.client.review_commenters(locator, number),
            self.client.reviewers(locator, number),
        )?;

        let commenters = issue_commenters
            .into_iter()
            .chain(review_commenters)
            .chain(reviewers)
            .collect();

        Ok(PullRequestParticipants { author, commenters })
    }

    /// Returns the trimmed profile name for `login`, or the login itself when
    /// the profile has no name or only whitespace.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn resolve_display_name(&self, login: &str) -> Result<String, KudosError> {
        let name = self.client.display_name(login).await?;
        Ok(display_name_or_login(login, name.as_deref()))
    }
}

/// Picks the display name for a login from its optional profile name.
#[must_use]
pub fn display_name_or_login(login: &str, name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .unwrap_or(login)
        .to_owned()
}
