use sunborn_logging::{sunborn_debug, sunborn_warn};

use crate::decode::decode_list_text;
use crate::fetch::Fetcher;
use crate::{ListSource, LoadError};

/// The two allowlist resources, fetched once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowlistSources {
    pub a: ListSource,
    pub b: ListSource,
}

/// Fetch and decode both allowlists concurrently.
///
/// Each side fails independently; the caller decides how a partial or total
/// failure maps onto the UI (degrade vs. load-error state).
pub async fn load_allowlists(
    fetcher: &dyn Fetcher,
    sources: &AllowlistSources,
) -> (Result<String, LoadError>, Result<String, LoadError>) {
    let (a, b) = tokio::join!(
        load_one(fetcher, &sources.a, "A"),
        load_one(fetcher, &sources.b, "B"),
    );
    (a, b)
}

async fn load_one(
    fetcher: &dyn Fetcher,
    source: &ListSource,
    label: &str,
) -> Result<String, LoadError> {
    let result: Result<String, LoadError> = async {
        let output = fetcher.fetch(source).await?;
        let text = decode_list_text(&output.bytes, output.content_type.as_deref())?;
        Ok(text)
    }
    .await;

    match &result {
        Ok(text) => sunborn_debug!(
            "allowlist {} loaded from {} ({} bytes)",
            label,
            source,
            text.len()
        ),
        Err(err) => sunborn_warn!("allowlist {} failed to load from {}: {}", label, source, err),
    }
    result
}
