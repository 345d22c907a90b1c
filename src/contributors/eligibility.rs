//! Rules deciding which pull requests and participants count.

use std::collections::BTreeSet;

use crate::github::models::Participant;

/// Exclusion lists applied during discovery and aggregation.
///
/// The two predicates are deliberately asymmetric: core-team members may
/// author a qualifying pull request, but never appear as contributors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilityFilter {
    ignored_logins: BTreeSet<String>,
    core_team_logins: BTreeSet<String>,
}

impl EligibilityFilter {
    /// Builds a filter from ignored and core-team login lists.
    ///
    /// # Example
    ///
    /// ```
    /// use kudos::contributors::EligibilityFilter;
    ///
    /// let filter = EligibilityFilter::new(["astrobot-houston"], ["matthewp"]);
    /// assert!(!filter.is_eligible_contributor("matthewp"));
    /// assert!(filter.is_eligible_contributor("alice"));
    /// ```
    pub fn new<I, C>(ignored_logins: I, core_team_logins: C) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            ignored_logins: ignored_logins.into_iter().map(Into::into).collect(),
            core_team_logins: core_team_logins.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a pull request by `author` should be inspected at all.
    ///
    /// Bots and ignored logins disqualify the pull request; core-team
    /// authors do not.
    #[must_use]
    pub fn is_qualifying_pr_author(&self, author: &Participant) -> bool {
        !author.is_bot() && !self.ignored_logins.contains(&author.login)
    }

    /// Whether `login` may appear in the contributor report.
    #[must_use]
    pub fn is_eligible_contributor(&self, login: &str) -> bool {
        !self.ignored_logins.contains(login) && !self.core_team_logins.contains(login)
    }

    /// Whether a participant may appear in the contributor report.
    ///
    /// Adds the bot check to [`Self::is_eligible_contributor`], so automation
    /// accounts that comment on pull requests never need to be listed as
    /// ignored.
    #[must_use]
    pub fn is_eligible_participant(&self, participant: &Participant) -> bool {
        !participant.is_bot() && self.is_eligible_contributor(&participant.login)
    }
}
