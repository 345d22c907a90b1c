//! Memoized display-name resolution.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::KudosError;
use crate::github::gateway::ContributorGateway;
use crate::github::intake::ContributorIntake;

/// Something that can turn a login into a display name.
#[async_trait]
pub trait NameSource: Send {
    /// Returns the display name for `login`.
    async fn display_name(&mut self, login: &str) -> Result<String, KudosError>;
}

/// Resolves display names through GitHub, at most once per login per run.
pub struct DisplayNameResolver<'client, Gateway>
where
    Gateway: ContributorGateway,
{
    intake: ContributorIntake<'client, Gateway>,
    cache: HashMap<String, String>,
}

impl<'client, Gateway> DisplayNameResolver<'client, Gateway>
where
    Gateway: ContributorGateway,
{
    /// Creates a resolver with an empty cache.
    #[must_use]
    pub fn new(client: &'client Gateway) -> Self {
        Self {
            intake: ContributorIntake::new(client),
            cache: HashMap::new(),
        }
    }

    /// Number of distinct logins resolved so far.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<Gateway> NameSource for DisplayNameResolver<'_, Gateway>
where
    Gateway: ContributorGateway,
{
    async fn display_name(&mut self, login: &str) -> Result<String, KudosError> {
        if let Some(name) = self.cache.get(login) {
            tracing::trace!("display name cache hit for {login}");
            return Ok(name.clone());
        }

        let name = self.intake.resolve_display_name(login).await?;
        self.cache.insert(login.to_owned(), name.clone());
        Ok(name)
    }
}
