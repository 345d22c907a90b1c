//! Paginated list fetching shared by the gateway endpoints.

use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;

/// List endpoint page size; the maximum GitHub accepts.
pub(super) const PAGE_SIZE: &str = "100";

/// Fetches the first page of `route` and follows `Link: rel="next"` headers
/// until every item has been read.
pub(super) async fn fetch_all_pages<T>(
    client: &Octocrab,
    route: &str,
    parameters: &[(&str, &str)],
) -> Result<Vec<T>, octocrab::Error>
where
    T: DeserializeOwned + Send,
{
    let first = client.get::<Page<T>, _, _>(route, Some(parameters)).await?;
    client.all_pages(first).await
}
