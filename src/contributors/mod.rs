//! Contributor aggregation: who counts, what they are called, and how
//! appearances across many pull requests collapse into one list.

pub mod aggregator;
pub mod collector;
pub mod eligibility;
pub mod resolver;

pub use aggregator::{Contributor, ContributorRegistry, RecordOutcome};
pub use collector::{ContributorCollector, NoopProgress, ProgressReporter, RepositoryPlan};
pub use eligibility::EligibilityFilter;
pub use resolver::{DisplayNameResolver, NameSource};
