//! Octocrab implementation of the contributor gateway.

use async_trait::async_trait;
use http::Uri;
use octocrab::Octocrab;

use crate::error::KudosError;
use crate::github::locator::{PersonalAccessToken, PullRequestNumber, RepositoryLocator};
use crate::github::models::{
    ApiAuthored, ApiSearchItem, ApiUserProfile, Participant, PullRequestSummary,
};
use crate::github::rate_limit::RateLimitInfo;
use crate::github::search::DiscoveryCriteria;

use super::ContributorGateway;
use super::error_mapping::{FailureKind, classify, describe};
use super::pages::{PAGE_SIZE, fetch_all_pages};

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated Octocrab client for the given token and REST
    /// API base, e.g. `https://api.github.com` or a GitHub Enterprise
    /// `https://<host>/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns `KudosError::InvalidUrl` when the base URI cannot be parsed or
    /// `KudosError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &str) -> Result<Self, KudosError> {
        let base_uri = api_base
            .parse::<Uri>()
            .map_err(|error| KudosError::InvalidUrl(format!("{api_base}: {error}")))?;

        let client = Octocrab::builder()
            .personal_token(token.value())
            .base_uri(base_uri)
            .and_then(|builder| builder.build())
            .map_err(|error| KudosError::Api {
                message: describe("build client", &error),
            })?;
        Ok(Self::new(client))
    }

    async fn participants(
        &self,
        operation: &str,
        route: &str,
    ) -> Result<Vec<Participant>, KudosError> {
        match fetch_all_pages::<ApiAuthored>(&self.client, route, &[("per_page", PAGE_SIZE)]).await
        {
            Ok(items) => Ok(items
                .into_iter()
                .filter_map(ApiAuthored::into_participant)
                .collect()),
            Err(error) => Err(self.map_error(operation, &error).await),
        }
    }

    async fn map_error(&self, operation: &str, error: &octocrab::Error) -> KudosError {
        let message = describe(operation, error);
        tracing::debug!("{message}");

        match classify(error) {
            FailureKind::Authentication => KudosError::Authentication { message },
            FailureKind::Network => KudosError::Network { message },
            FailureKind::Api => KudosError::Api { message },
            FailureKind::RateLimited => {
                let rate_limit = self.fetch_rate_limit_info().await;
                KudosError::RateLimitExceeded {
                    message: match &rate_limit {
                        Some(info) => format!("{message} (resets at {info})"),
                        None => message,
                    },
                    rate_limit,
                }
            }
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        RateLimitInfo::from_epoch_seconds(rate.reset)
    }
}

#[async_trait]
impl ContributorGateway for OctocrabGateway {
    async fn search_merged_pull_requests(
        &self,
        locator: &RepositoryLocator,
        criteria: &DiscoveryCriteria,
    ) -> Result<Vec<PullRequestSummary>, KudosError> {
        let terms = criteria.search_terms(locator);
        let parameters = [
            ("q", terms.as_str()),
            ("advanced_search", "true"),
            ("per_page", PAGE_SIZE),
        ];

        match fetch_all_pages::<ApiSearchItem>(&self.client, "/search/issues", &parameters).await
        {
            Ok(items) => Ok(items
                .into_iter()
                .filter_map(ApiSearchItem::into_summary)
                .collect()),
            Err(error) => Err(self.map_error("search pull requests", &error).await),
        }
    }

    async fn pull_request_author(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Option<Participant>, KudosError> {
        match self
            .client
            .get::<ApiAuthored, _, _>(locator.pull_request_path(number), None::<&()>)
            .await
        {
            Ok(pull_request) => Ok(pull_request.into_participant()),
            Err(error) => Err(self.map_error("pull request", &error).await),
        }
    }

    async fn issue_commenters(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<Participant>, KudosError> {
        self.participants("issue comments", &locator.issue_comments_path(number))
            .await
    }

    async fn review_commenters(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<Participant>, KudosError> {
        self.participants("review comments", &locator.review_comments_path(number))
            .await
    }

    async fn reviewers(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<Participant>, KudosError> {
        self.participants("reviews", &locator.reviews_path(number))
            .await
    }

    async fn display_name(&self, login: &str) -> Result<Option<String>, KudosError> {
        match self
            .client
            .get::<ApiUserProfile, _, _>(format!("/users/{login}"), None::<&()>)
            .await
        {
            Ok(profile) => Ok(profile.name),
            Err(error) => Err(self.map_error("user profile", &error).await),
        }
    }
}

#[cfg(test)]
mod tests;
