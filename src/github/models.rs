//! Data models for pull request participants.
//!
//! Types prefixed with `Api` are internal deserialisation targets for GitHub
//! REST payloads; they convert into the public domain types, dropping users
//! without a login (deleted accounts surface as `"user": null`).

use serde::Deserialize;

use super::locator::PullRequestNumber;

/// Kind of GitHub account behind a participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// A human user or organisation account.
    #[default]
    User,
    /// A GitHub App or other automation account.
    Bot,
}

impl AccountType {
    const fn from_api(kind: Option<&str>) -> Self {
        match kind {
            Some(value) if value.eq_ignore_ascii_case("bot") => Self::Bot,
            _ => Self::User,
        }
    }
}

/// A user who authored, commented on, or reviewed a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    /// Platform login, case-sensitive.
    pub login: String,
    /// Whether the account is a bot.
    pub account_type: AccountType,
    /// Link to the user's profile page.
    pub profile_url: String,
}

impl Participant {
    /// Creates a human participant whose profile lives on github.com.
    #[must_use]
    pub fn user(login: &str) -> Self {
        Self {
            login: login.to_owned(),
            account_type: AccountType::User,
            profile_url: format!("https://github.com/{login}"),
        }
    }

    /// Creates a bot participant whose profile lives on github.com.
    #[must_use]
    pub fn bot(login: &str) -> Self {
        Self {
            account_type: AccountType::Bot,
            ..Self::user(login)
        }
    }

    /// Returns true if the account is a bot.
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.account_type == AccountType::Bot
    }
}

/// A merged pull request returned by search, before eligibility is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// Pull request number.
    pub number: PullRequestNumber,
    /// Author, if GitHub still knows the account.
    pub author: Option<Participant>,
}

/// Everyone involved in one pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestParticipants {
    /// Pull request author, if GitHub still knows the account.
    pub author: Option<Participant>,
    /// Authors of issue comments, review comments, and reviews, in that
    /// order. The same user may appear several times.
    pub commenters: Vec<Participant>,
}

impl PullRequestParticipants {
    /// Iterates over the author followed by every commenter.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.author.iter().chain(self.commenters.iter())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
    pub(crate) html_url: Option<String>,
}

impl ApiUser {
    pub(crate) fn into_participant(self) -> Option<Participant> {
        let login = self.login.filter(|login| !login.is_empty())?;
        let profile_url = self
            .html_url
            .unwrap_or_else(|| format!("https://github.com/{login}"));
        Some(Participant {
            account_type: AccountType::from_api(self.kind.as_deref()),
            login,
            profile_url,
        })
    }
}

/// Search hit from `/search/issues`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiSearchItem {
    pub(crate) number: u64,
    pub(crate) user: Option<ApiUser>,
}

impl ApiSearchItem {
    pub(crate) fn into_summary(self) -> Option<PullRequestSummary> {
        Some(PullRequestSummary {
            number: PullRequestNumber::new(self.number)?,
            author: self.user.and_then(ApiUser::into_participant),
        })
    }
}

/// Pull request detail, issue comment, review comment, and review payloads
/// all carry the acting user under `user`; nothing else is read.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiAuthored {
    pub(crate) user: Option<ApiUser>,
}

impl ApiAuthored {
    pub(crate) fn into_participant(self) -> Option<Participant> {
        self.user.and_then(ApiUser::into_participant)
    }
}

/// User profile from `/users/{login}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUserProfile {
    pub(crate) name: Option<String>,
}
