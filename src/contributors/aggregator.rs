//! Deduplicated accumulation of contributors across pull requests.

use std::collections::BTreeMap;

use crate::error::KudosError;
use crate::github::models::Participant;

use super::eligibility::EligibilityFilter;
use super::resolver::NameSource;

/// A participant accepted into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    /// Platform login; the deduplication key.
    pub login: String,
    /// Resolved display name.
    pub display_name: String,
    /// Link to the contributor's profile.
    pub profile_link: String,
}

/// What [`ContributorRegistry::record`] did with an offered participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new contributor was added.
    Recorded,
    /// The login was already present; nothing changed.
    AlreadyRecorded,
    /// The participant is ignored, core team, or a bot.
    Ineligible,
}

/// All contributors found during one run, keyed by login.
///
/// Entries are only ever added. The first offer for a login wins; later
/// offers of the same login never trigger another name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorRegistry {
    contributors: BTreeMap<String, Contributor>,
}

impl ContributorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a participant to the registry.
    ///
    /// The presence check runs before the eligibility check and both run
    /// before `names` is consulted, so a display name is resolved only for
    /// logins that will actually be inserted.
    ///
    /// # Errors
    ///
    /// Propagates a failed display-name lookup; the registry is unchanged.
    pub async fn record<N>(
        &mut self,
        filter: &EligibilityFilter,
        participant: &Participant,
        names: &mut N,
    ) -> Result<RecordOutcome, KudosError>
    where
        N: NameSource + ?Sized,
    {
        if self.contributors.contains_key(&participant.login) {
            return Ok(RecordOutcome::AlreadyRecorded);
        }
        if !filter.is_eligible_participant(participant) {
            tracing::debug!("skipping participant {}: not eligible", participant.login);
            return Ok(RecordOutcome::Ineligible);
        }

        let display_name = names.display_name(&participant.login).await?;
        self.contributors.insert(
            participant.login.clone(),
            Contributor {
                login: participant.login.clone(),
                display_name,
                profile_link: participant.profile_url.clone(),
            },
        );
        Ok(RecordOutcome::Recorded)
    }

    /// Looks up a contributor by login.
    #[must_use]
    pub fn get(&self, login: &str) -> Option<&Contributor> {
        self.contributors.get(login)
    }

    /// Number of contributors recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    /// Returns true if nobody has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    /// Iterates over contributors in login order.
    pub fn iter(&self) -> impl Iterator<Item = &Contributor> {
        self.contributors.values()
    }

    /// Consumes the registry, yielding contributors in login order.
    #[must_use]
    pub fn into_contributors(self) -> Vec<Contributor> {
        self.contributors.into_values().collect()
    }
}
