//! Tests for the Octocrab gateway against a local HTTP stub.

use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::OctocrabGateway;
use crate::error::KudosError;
use crate::github::gateway::ContributorGateway;
use crate::github::locator::{PersonalAccessToken, PullRequestNumber, RepositoryLocator};
use crate::github::models::AccountType;
use crate::github::search::{DiscoveryCriteria, MergeWindow};

struct StubbedGateway {
    server: MockServer,
    locator: RepositoryLocator,
    gateway: OctocrabGateway,
}

async fn stubbed_gateway() -> StubbedGateway {
    let server = MockServer::start().await;
    let token = PersonalAccessToken::new("valid-token").expect("token should be valid");
    let gateway =
        OctocrabGateway::for_token(&token, &server.uri()).expect("should create gateway");
    let locator = RepositoryLocator::parse("octo/repo").expect("should parse repository");
    StubbedGateway {
        server,
        locator,
        gateway,
    }
}

fn criteria() -> DiscoveryCriteria {
    let since = Utc
        .with_ymd_and_hms(2026, 1, 29, 11, 7, 19)
        .single()
        .expect("valid since date");
    let until = Utc
        .with_ymd_and_hms(2026, 3, 1, 0, 0, 0)
        .single()
        .expect("valid until date");
    DiscoveryCriteria {
        base_branch: "main".to_owned(),
        window: MergeWindow::new(since, until),
    }
}

fn number(value: u64) -> PullRequestNumber {
    PullRequestNumber::new(value).expect("pull request number should be non-zero")
}

#[rstest]
#[tokio::test]
async fn search_follows_every_result_page() {
    let stub = stubbed_gateway().await;
    let expected_query =
        "repo:octo/repo is:pr is:merged base:main merged:2026-01-29T11:07:19.000Z..2026-03-01T00:00:00.000Z";
    let next_url = format!("{}/search/issues?page=2", stub.server.uri());

    Mock::given(method("GET"))
        .and(path("/search/issues"))
        .and(query_param("q", expected_query))
        .and(query_param("advanced_search", "true"))
        .and(query_param("per_page", "100"))
        .and(query_param_is_missing("page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "total_count": 2,
                    "incomplete_results": false,
                    "items": [
                        { "number": 1, "user": { "login": "alice", "type": "User" } }
                    ]
                }))
                .insert_header("Link", format!("<{next_url}>; rel=\"next\"")),
        )
        .mount(&stub.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/issues"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                { "number": 2, "user": { "login": "dependabot[bot]", "type": "Bot" } }
            ]
        })))
        .mount(&stub.server)
        .await;

    let summaries = stub
        .gateway
        .search_merged_pull_requests(&stub.locator, &criteria())
        .await
        .expect("search should succeed");

    let numbers: Vec<u64> = summaries.iter().map(|summary| summary.number.get()).collect();
    assert_eq!(numbers, vec![1, 2], "both pages should be read");
    let second_author = summaries
        .get(1)
        .and_then(|summary| summary.author.as_ref())
        .expect("second result should have an author");
    assert_eq!(second_author.account_type, AccountType::Bot);
}

#[rstest]
#[tokio::test]
async fn reviewers_skip_deleted_accounts() {
    let stub = stubbed_gateway().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/pulls/7/reviews"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "state": "APPROVED", "user": { "login": "carol", "type": "User", "html_url": "https://github.com/carol" } },
            { "id": 2, "state": "COMMENTED", "user": null }
        ])))
        .mount(&stub.server)
        .await;

    let reviewers = stub
        .gateway
        .reviewers(&stub.locator, number(7))
        .await
        .expect("reviews request should succeed");

    let logins: Vec<&str> = reviewers.iter().map(|user| user.login.as_str()).collect();
    assert_eq!(logins, vec!["carol"]);
}

#[rstest]
#[tokio::test]
async fn pull_request_author_reads_user_field() {
    let stub = stubbed_gateway().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/pulls/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 7,
            "title": "Add feature",
            "user": { "login": "bob", "type": "User", "html_url": "https://github.com/bob" }
        })))
        .mount(&stub.server)
        .await;

    let author = stub
        .gateway
        .pull_request_author(&stub.locator, number(7))
        .await
        .expect("pull request request should succeed")
        .expect("author should be present");

    assert_eq!(author.login, "bob");
    assert_eq!(author.profile_url, "https://github.com/bob");
}

#[rstest]
#[case::named(json!({ "login": "alice", "name": "Alice Liddell" }), Some("Alice Liddell"))]
#[case::unnamed(json!({ "login": "alice", "name": null }), None)]
#[tokio::test]
async fn display_name_reads_profile_name(
    #[case] body: serde_json::Value,
    #[case] expected: Option<&str>,
) {
    let stub = stubbed_gateway().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&stub.server)
        .await;

    let name = stub
        .gateway
        .display_name("alice")
        .await
        .expect("profile request should succeed");

    assert_eq!(name.as_deref(), expected);
}

#[rstest]
#[tokio::test]
async fn rejected_token_maps_to_authentication_error() {
    let stub = stubbed_gateway().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/issues/7/comments"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&stub.server)
        .await;

    let error = stub
        .gateway
        .issue_commenters(&stub.locator, number(7))
        .await
        .expect_err("request should fail");

    assert!(
        matches!(error, KudosError::Authentication { ref message } if message.contains("Bad credentials")),
        "expected Authentication, got {error:?}"
    );
}

#[rstest]
#[tokio::test]
async fn exhausted_quota_maps_to_rate_limit_error() {
    const EXPECTED_RESET_AT: u64 = 1_700_000_000;

    let stub = stubbed_gateway().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/pulls/7/comments"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded for user",
            "documentation_url": "https://docs.github.com/rest/rate-limit"
        })))
        .mount(&stub.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": {
                "core": { "limit": 5000, "used": 5000, "remaining": 0, "reset": EXPECTED_RESET_AT },
                "search": { "limit": 30, "used": 0, "remaining": 30, "reset": EXPECTED_RESET_AT }
            },
            "rate": { "limit": 5000, "used": 5000, "remaining": 0, "reset": EXPECTED_RESET_AT }
        })))
        .mount(&stub.server)
        .await;

    let error = stub
        .gateway
        .review_commenters(&stub.locator, number(7))
        .await
        .expect_err("request should fail");

    match error {
        KudosError::RateLimitExceeded {
            rate_limit,
            message,
        } => {
            let info = rate_limit.expect("expected rate_limit info to be populated");
            assert_eq!(info.reset_at().timestamp().cast_unsigned(), EXPECTED_RESET_AT);
            assert!(
                message.contains("API rate limit exceeded for user"),
                "unexpected message: {message}"
            );
            assert!(
                message.contains("(resets at 2023-11-14T22:13:20Z)"),
                "expected message to include reset time, got `{message}`"
            );
        }
        other => panic!("expected RateLimitExceeded, got {other:?}"),
    }
}

#[rstest]
fn malformed_api_base_is_rejected() {
    let token = PersonalAccessToken::new("valid-token").expect("token should be valid");

    let result = OctocrabGateway::for_token(&token, "http://bad host/api/v3");

    assert!(
        matches!(result, Err(KudosError::InvalidUrl(_))),
        "expected InvalidUrl"
    );
}
