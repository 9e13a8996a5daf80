//! `list` and `show` command handlers.
//!
//! Called from `main` once configuration is loaded and the client is built.
//! A cancelled request (Ctrl-C) is not an error: it is logged and the command
//! returns normally.

use std::collections::HashMap;
use std::future::Future;

use prodcat_client::{canonicalize_detail, CatalogClient, ClientError, ListQuery};
use prodcat_core::{DetailResult, Format};

use crate::display::{
    detail_rows, pretty_raw, product_line, truncate_body, ERROR_BODY_PREVIEW_CHARS,
};
use crate::sort::{sort_products, SortSpec};

/// Details already fetched during this invocation, keyed by id and format.
#[derive(Default)]
pub(crate) struct DetailCache {
    entries: HashMap<(String, Format), DetailResult>,
}

impl DetailCache {
    pub(crate) fn get(&self, id: &str, format: Format) -> Option<&DetailResult> {
        self.entries.get(&(id.to_owned(), format))
    }

    pub(crate) fn insert(&mut self, id: &str, format: Format, detail: DetailResult) {
        self.entries.insert((id.to_owned(), format), detail);
    }
}

/// Fetch and print one page of products.
///
/// # Errors
///
/// Returns an error for any failure other than cancellation.
pub(crate) async fn run_list<C>(
    client: &CatalogClient,
    query: ListQuery,
    sort: SortSpec,
    raw: bool,
    cancel: C,
) -> anyhow::Result<()>
where
    C: Future<Output = ()>,
{
    let mut result = match client.fetch_list_until(&query, cancel).await {
        Ok(result) => result,
        Err(err) => return absorb_cancel(err),
    };

    if raw {
        println!("{}", pretty_raw(&result.raw_body));
        return Ok(());
    }

    sort_products(&mut result.items, sort);

    if result.items.is_empty() {
        println!("No products to show.");
    }
    for product in &result.items {
        println!("{}", product_line(product));
    }
    println!("Page {} / {}", query.page, result.total_pages);
    if query.page > result.total_pages {
        tracing::warn!(
            page = query.page,
            total_pages = result.total_pages,
            "requested page is past the last page"
        );
    }

    Ok(())
}

/// Fetch and print each product in `ids`. Repeated ids are served from the
/// cache.
///
/// # Errors
///
/// Returns an error for any failure other than cancellation.
pub(crate) async fn run_show<C>(
    client: &CatalogClient,
    ids: &[String],
    format: Format,
    raw: bool,
    cancel: C,
) -> anyhow::Result<()>
where
    C: Future<Output = ()>,
{
    let mut cache = DetailCache::default();
    tokio::pin!(cancel);

    for (idx, id) in ids.iter().enumerate() {
        if cache.get(id, format).is_none() {
            let detail = match client.fetch_one_until(id, format, cancel.as_mut()).await {
                Ok(detail) => detail,
                Err(err) => return absorb_cancel(err),
            };
            cache.insert(id, format, detail);
        } else {
            tracing::debug!(id = %id, %format, "detail served from cache");
        }

        let Some(detail) = cache.get(id, format) else {
            continue;
        };

        if idx > 0 {
            println!();
        }
        if raw {
            println!("{}", pretty_raw(&detail.raw_body));
            continue;
        }
        let product = canonicalize_detail(&detail.record);
        for (label, value) in detail_rows(&product) {
            println!("{label:<12}{value}");
        }
    }

    Ok(())
}

/// Swallows cancellation; turns anything else into a displayable error with
/// the body preview for HTTP failures.
fn absorb_cancel(err: ClientError) -> anyhow::Result<()> {
    match err {
        ClientError::Cancelled => {
            tracing::info!("request cancelled");
            Ok(())
        }
        ClientError::Fetch(fetch) => Err(anyhow::anyhow!(
            "{}\n{}",
            fetch.message,
            truncate_body(&fetch.body, ERROR_BODY_PREVIEW_CHARS)
        )),
        other => Err(other.into()),
    }
}
