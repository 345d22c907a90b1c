//! Kudos library crate for crediting external contributors.
//!
//! The library searches GitHub for pull requests merged since a given date,
//! collects everyone who authored, commented on, or reviewed them, drops
//! maintainers, ignored accounts and bots, and renders the remaining people
//! as a sorted Markdown list suitable for release notes.

pub mod config;
pub mod contributors;
pub mod error;
pub mod github;
pub mod report;

pub use config::{KudosConfig, ReleaseMode};
pub use contributors::{
    Contributor, ContributorCollector, ContributorRegistry, EligibilityFilter, NoopProgress,
    ProgressReporter, RepositoryPlan,
};
pub use error::KudosError;
pub use github::{
    ContributorGateway, ContributorIntake, OctocrabGateway, PersonalAccessToken,
    RepositoryLocator,
};
pub use report::{format_contributors, write_report};
