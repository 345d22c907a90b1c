//! Contributor report operation.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use kudos::{
    ContributorCollector, ContributorGateway, KudosConfig, KudosError, OctocrabGateway,
    PersonalAccessToken, format_contributors, write_report,
};
use url::Url;

use super::output::{write_completion, write_run_header};
use super::progress::ConsoleProgress;

/// Collects contributors for the configured repositories and writes the
/// report file.
///
/// # Errors
///
/// Returns configuration errors before any request is sent, the first
/// GitHub failure during collection, or [`KudosError::Io`] when the report
/// cannot be written.
pub async fn run(config: &KudosConfig) -> Result<(), KudosError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(
        config,
        |token, api_base| OctocrabGateway::for_token(token, api_base.as_str()),
        Utc::now(),
        &mut stdout,
    )
    .await
}

/// Runs the report using a custom gateway builder.
///
/// This function is exposed for testing with fake gateways. `until` closes
/// the merge window.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &KudosConfig,
    build_gateway: F,
    until: DateTime<Utc>,
    writer: &mut W,
) -> Result<(), KudosError>
where
    G: ContributorGateway,
    F: FnOnce(&PersonalAccessToken, &Url) -> Result<G, KudosError>,
    W: Write,
{
    let token = config.resolve_token()?;
    let api_base = config.api_base()?;
    let plans = config.repository_plans(until)?;
    let filter = config.eligibility_filter();
    let output_path = config.output_path();

    let gateway = build_gateway(&token, &api_base)?;

    let since = config.since_date()?;
    write_run_header(writer, since)?;
    tracing::info!(
        "collecting contributors from {} repositories in {:?} mode",
        plans.len(),
        config.release_mode()
    );

    let mut progress = ConsoleProgress::new(&mut *writer);
    let registry = ContributorCollector::new(&gateway, filter)
        .collect(&plans, &mut progress)
        .await?;

    let contributors = registry.into_contributors();
    let report = format_contributors(&contributors);
    write_report(output_path, &report)?;
    write_completion(writer, contributors.len(), output_path)
}
