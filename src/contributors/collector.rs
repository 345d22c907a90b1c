//! Sequencing of a report run: discovery, then participant collection.

use crate::error::KudosError;
use crate::github::gateway::ContributorGateway;
use crate::github::intake::ContributorIntake;
use crate::github::locator::{PullRequestNumber, RepositoryLocator};
use crate::github::search::DiscoveryCriteria;

use super::aggregator::{ContributorRegistry, RecordOutcome};
use super::eligibility::EligibilityFilter;
use super::resolver::DisplayNameResolver;

/// One repository to scan and the criteria its pull requests must meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPlan {
    /// Repository to scan.
    pub locator: RepositoryLocator,
    /// Target branch and merge window.
    pub criteria: DiscoveryCriteria,
}

/// Receives progress notifications while a run is in flight.
///
/// Reporting is a side effect only; implementations must not influence the
/// collected result. Every hook defaults to doing nothing.
pub trait ProgressReporter {
    /// Discovery finished for one repository.
    fn repository_discovered(&mut self, _repository: &RepositoryLocator, _pull_requests: usize) {}

    /// Every repository has been searched.
    fn discovery_finished(&mut self) {}

    /// Participants of the `position`-th (1-based) of `total` pull requests
    /// are about to be fetched.
    fn pull_request_started(
        &mut self,
        _repository: &RepositoryLocator,
        _position: usize,
        _total: usize,
    ) {
    }

    /// Every pull request of a repository has been processed.
    fn repository_finished(&mut self, _repository: &RepositoryLocator) {}
}

/// Progress reporter that drops all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {}

/// Runs discovery and aggregation for a list of repositories.
pub struct ContributorCollector<'client, Gateway>
where
    Gateway: ContributorGateway,
{
    intake: ContributorIntake<'client, Gateway>,
    names: DisplayNameResolver<'client, Gateway>,
    filter: EligibilityFilter,
}

impl<'client, Gateway> ContributorCollector<'client, Gateway>
where
    Gateway: ContributorGateway,
{
    /// Creates a collector for one run.
    #[must_use]
    pub fn new(client: &'client Gateway, filter: EligibilityFilter) -> Self {
        Self {
            intake: ContributorIntake::new(client),
            names: DisplayNameResolver::new(client),
            filter,
        }
    }

    /// Collects contributors from every planned repository.
    ///
    /// All repositories are searched first, in the given order; then each
    /// repository's pull requests are inspected in discovery order. Nothing
    /// is returned unless every remote call succeeds.
    ///
    /// # Errors
    ///
    /// Fails with the first gateway error.
    pub async fn collect<P>(
        mut self,
        plans: &[RepositoryPlan],
        progress: &mut P,
    ) -> Result<ContributorRegistry, KudosError>
    where
        P: ProgressReporter + ?Sized,
    {
        let mut discovered: Vec<(&RepositoryLocator, Vec<PullRequestNumber>)> =
            Vec::with_capacity(plans.len());
        for plan in plans {
            let numbers = self
                .intake
                .find_qualifying_pull_request_numbers(&plan.locator, &plan.criteria, &self.filter)
                .await?;
            tracing::info!("found {} qualifying pull requests in {}", numbers.len(), plan.locator);
            progress.repository_discovered(&plan.locator, numbers.len());
            discovered.push((&plan.locator, numbers));
        }
        progress.discovery_finished();

        let mut registry = ContributorRegistry::new();
        for (locator, numbers) in discovered {
            if numbers.is_empty() {
                continue;
            }

            for (index, number) in numbers.iter().enumerate() {
                progress.pull_request_started(locator, index + 1, numbers.len());
                self.collect_pull_request(&mut registry, locator, *number)
                    .await?;
            }
            progress.repository_finished(locator);
        }

        Ok(registry)
    }

    async fn collect_pull_request(
        &mut self,
        registry: &mut ContributorRegistry,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<(), KudosError> {
        let participants = self
            .intake
            .fetch_pull_request_participants(locator, number)
            .await?;

        for participant in participants.iter() {
            let outcome = registry
                .record(&self.filter, participant, &mut self.names)
                .await?;
            if outcome == RecordOutcome::Recorded {
                tracing::debug!("recorded {} from {locator}{number}", participant.login);
            }
        }
        Ok(())
    }
}
