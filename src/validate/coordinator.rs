//! Concurrent probe fan-out and result aggregation
//!
//! One task per document, one permit-gated task per link. Results are joined
//! by index on the original vectors, never by arrival order, so the report
//! keeps the deterministic scan/extraction ordering. Each link's status is
//! written exactly once, by its document task, after the link task reports.

use crate::config::ProbeConfig;
use crate::document::{Document, LinkStatus};
use crate::probe::{build_http_client, probe_url};
use crate::report::Report;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// Coordinates reachability validation for a batch of documents
pub struct Validator {
    client: Client,
    semaphore: Arc<Semaphore>,
}

impl Validator {
    /// Creates a validator with a shared client and a probe pool sized by
    /// `max-concurrent-probes`
    ///
    /// # Arguments
    ///
    /// * `config` - The probe configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Validator)` - Ready to validate
    /// * `Err(DoclinkError)` - Failed to build the HTTP client
    pub fn new(config: &ProbeConfig) -> crate::Result<Self> {
        let client = build_http_client(config)?;
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_probes));
        Ok(Self { client, semaphore })
    }

    /// Validates every link of every document and assembles the report.
    ///
    /// A document's validity is computed only after all of its own links have
    /// resolved, and the report is assembled only after every document has
    /// completed. Probe failures are data, not errors: they surface as broken
    /// links, so this method itself cannot fail.
    ///
    /// # Arguments
    ///
    /// * `documents` - Documents with filtered, unprobed links, in scan order
    /// * `directories` - Root directories covered by the scan
    pub async fn validate(&self, documents: Vec<Document>, directories: Vec<PathBuf>) -> Report {
        let total_links: usize = documents.iter().map(|d| d.hyperlinks.len()).sum();
        tracing::info!(
            "Probing {} links across {} documents",
            total_links,
            documents.len()
        );

        let handles: Vec<(Document, JoinHandle<Document>)> = documents
            .into_iter()
            .map(|document| {
                // Snapshot kept so a panicked task still shows up in the report
                let snapshot = document.clone();
                let client = self.client.clone();
                let semaphore = self.semaphore.clone();
                let handle = tokio::spawn(validate_document(client, semaphore, document));
                (snapshot, handle)
            })
            .collect();

        // Whole-batch barrier: join in scan order, not completion order
        let mut validated = Vec::with_capacity(handles.len());
        for (snapshot, handle) in handles {
            match handle.await {
                Ok(document) => validated.push(document),
                Err(e) => {
                    tracing::error!(
                        "Validation task for {} panicked: {}",
                        snapshot.path.display(),
                        e
                    );
                    // Unprobed links count as broken, keeping the report
                    // invariant (overall validity matches the broken list)
                    let mut document = snapshot;
                    for link in &mut document.hyperlinks {
                        link.status = LinkStatus::Broken;
                    }
                    document.is_valid = document.hyperlinks.is_empty();
                    validated.push(document);
                }
            }
        }

        Report::assemble(directories, validated)
    }
}

/// Validates a single document's links concurrently.
///
/// Spawns one permit-gated task per link, then joins them by index: the
/// per-document barrier. Validity is recomputed only after every link has
/// resolved; a document with zero links is valid.
async fn validate_document(
    client: Client,
    semaphore: Arc<Semaphore>,
    mut document: Document,
) -> Document {
    let handles: Vec<JoinHandle<LinkStatus>> = document
        .hyperlinks
        .iter()
        .map(|link| {
            let client = client.clone();
            let semaphore = semaphore.clone();
            let url = link.url.clone();
            tokio::spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    // Closed semaphore means shutdown is in progress
                    Err(_) => return LinkStatus::Broken,
                };
                probe_url(&client, &url).await
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        document.hyperlinks[index].status = match handle.await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!(
                    "Probe task for {} panicked: {}",
                    document.hyperlinks[index].url,
                    e
                );
                LinkStatus::Broken
            }
        };
    }

    document.is_valid = document
        .hyperlinks
        .iter()
        .all(|link| link.status == LinkStatus::Working);

    tracing::debug!(
        "{} resolved: {}",
        document.path.display(),
        if document.is_valid { "valid" } else { "invalid" }
    );

    document
}
