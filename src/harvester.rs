//! Main harvester service that ties all components together.

use futures::future::join_all;
use tracing::{info, warn};

use crate::detail::download_tag;
use crate::error::Result;
use crate::http::Fetch;
use crate::index::download_index;
use crate::types::{TagFailure, TagOutcome};

/// Run the full extraction pipeline.
///
/// Extracts the descriptor sequence from the index document - any failure
/// there aborts the run, since the index defines the universe of work. Every
/// detail page is then extracted concurrently with settle-all semantics: one
/// tag's failure never cancels or blocks its siblings, and no retries happen
/// at this layer. The returned outcomes preserve descriptor order.
///
/// The fan-out is unbounded, which is fine at the scale of a few hundred
/// descriptors.
///
/// # Arguments
/// * `fetcher` - Transport capability
/// * `index_url` - Absolute URL of the index document
pub async fn harvest<F>(fetcher: &F, index_url: &str) -> Result<Vec<TagOutcome>>
where
    F: Fetch + ?Sized,
{
    let descriptors = download_index(fetcher, index_url).await?;
    info!(tags = descriptors.len(), "Index extracted");

    let outcomes: Vec<TagOutcome> = join_all(descriptors.iter().map(|descriptor| async move {
        download_tag(fetcher, descriptor).await.map_err(|error| {
            warn!(tag = %descriptor.tag, error = %error, "Tag extraction failed");
            TagFailure {
                tag: descriptor.tag.clone(),
                error,
            }
        })
    }))
    .await;

    let failures = outcomes.iter().filter(|outcome| outcome.is_err()).count();
    info!(
        tags = outcomes.len() - failures,
        failures, "Harvest complete"
    );

    Ok(outcomes)
}
