//! GitHub access for contributor discovery.
//!
//! This module wraps Octocrab to search merged pull requests, read the users
//! who took part in them, and look up profile names. Errors are mapped into
//! [`crate::KudosError`] variants so callers never see Octocrab internals.

pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;
pub mod rate_limit;
pub mod search;

pub use gateway::{ContributorGateway, OctocrabGateway};
pub use intake::ContributorIntake;
pub use locator::{PersonalAccessToken, PullRequestNumber, RepositoryLocator};
pub use models::{AccountType, Participant, PullRequestParticipants, PullRequestSummary};
pub use search::{DiscoveryCriteria, MergeWindow};

#[cfg(test)]
pub use gateway::MockContributorGateway;
