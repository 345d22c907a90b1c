//! Shared test utilities for CLI tests.

use std::collections::HashMap;

use async_trait::async_trait;
use kudos::github::search::DiscoveryCriteria;
use kudos::github::{Participant, PullRequestNumber, PullRequestSummary};
use kudos::{ContributorGateway, KudosError, RepositoryLocator};

/// Canned discussion for one pull request.
#[derive(Debug, Clone)]
pub struct CannedPullRequest {
    /// Pull request number.
    pub number: u64,
    /// Author returned by the pull request endpoint.
    pub author: Participant,
    /// Issue commenters.
    pub commenters: Vec<Participant>,
}

/// Builds a canned pull request with human and bot commenters.
pub fn pull_request(number: u64, author: &str, humans: &[&str], bots: &[&str]) -> CannedPullRequest {
    CannedPullRequest {
        number,
        author: Participant::user(author),
        commenters: humans
            .iter()
            .map(|login| Participant::user(login))
            .chain(bots.iter().map(|login| Participant::bot(login)))
            .collect(),
    }
}

/// A gateway that answers every repository with the same canned data.
#[derive(Debug, Clone, Default)]
pub struct StaticGateway {
    search: Vec<PullRequestSummary>,
    search_error: Option<KudosError>,
    pull_requests: HashMap<u64, CannedPullRequest>,
    names: HashMap<String, String>,
}

impl StaticGateway {
    /// Sets the search results.
    pub fn with_search(mut self, summaries: Vec<PullRequestSummary>) -> Self {
        self.search = summaries;
        self
    }

    /// Makes every search fail with `error`.
    pub fn failing_search(mut self, error: KudosError) -> Self {
        self.search_error = Some(error);
        self
    }

    /// Adds a canned pull request.
    pub fn with_pull_request(mut self, pull_request: CannedPullRequest) -> Self {
        self.pull_requests.insert(pull_request.number, pull_request);
        self
    }

    /// Sets the profile name for `login`.
    pub fn with_name(mut self, login: &str, name: &str) -> Self {
        self.names.insert(login.to_owned(), name.to_owned());
        self
    }

    fn canned(&self, number: PullRequestNumber) -> Result<&CannedPullRequest, KudosError> {
        self.pull_requests
            .get(&number.get())
            .ok_or_else(|| KudosError::Api {
                message: format!("no canned pull request {number}"),
            })
    }
}

#[async_trait]
impl ContributorGateway for StaticGateway {
    async fn search_merged_pull_requests(
        &self,
        _locator: &RepositoryLocator,
        _criteria: &DiscoveryCriteria,
    ) -> Result<Vec<PullRequestSummary>, KudosError> {
        match &self.search_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.search.clone()),
        }
    }

    async fn pull_request_author(
        &self,
        _locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Option<Participant>, KudosError> {
        Ok(Some(self.canned(number)?.author.clone()))
    }

    async fn issue_commenters(
        &self,
        _locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<Participant>, KudosError> {
        Ok(self.canned(number)?.commenters.clone())
    }

    async fn review_commenters(
        &self,
        _locator: &RepositoryLocator,
        _number: PullRequestNumber,
    ) -> Result<Vec<Participant>, KudosError> {
        Ok(Vec::new())
    }

    async fn reviewers(
        &self,
        _locator: &RepositoryLocator,
        _number: PullRequestNumber,
    ) -> Result<Vec<Participant>, KudosError> {
        Ok(Vec::new())
    }

    async fn display_name(&self, login: &str) -> Result<Option<String>, KudosError> {
        Ok(self.names.get(login).cloned())
    }
}
