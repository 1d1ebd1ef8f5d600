//! Download layer: blocking HTTP client plus a bounded worker pool.
//!
//! Workers hand results back over a channel; the receiving side is the
//! single place that touches the batch collector, so no other
//! synchronization is needed. A failed download is an outcome, not an
//! abort: the batch always runs to completion.

use crate::error::{AuditError, Result};
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const DEFAULT_CONCURRENCY: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(AuditError::ClientBuild)?;
        Ok(Self { client })
    }

    pub fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "Fetching");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| AuditError::DownloadError {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Non-success response");
            return Err(AuditError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| AuditError::DownloadError {
            url: url.to_string(),
            source,
        })
    }
}

/// One completed download, tagged with its input position so output file
/// numbering stays deterministic regardless of completion order.
#[derive(Debug)]
pub struct FetchOutcome<T> {
    pub index: usize,
    pub url: String,
    pub result: Result<T>,
}

/// Runs `fetch_fn` over `urls` on a fixed-size worker pool and returns the
/// receiving end of the outcome channel. Outcomes arrive in completion
/// order; the channel closes when every task is done. The closure may do
/// more than download (reformat, scan); only the receiving side has to
/// stay single-threaded.
pub fn fetch_all<T, F>(fetch_fn: F, urls: Vec<String>, concurrency: usize) -> Receiver<FetchOutcome<T>>
where
    T: Send + 'static,
    F: Fn(&str) -> Result<T> + Send + Sync + 'static,
{
    let workers = concurrency.max(1).min(urls.len().max(1));
    let queue: Arc<Mutex<VecDeque<(usize, String)>>> =
        Arc::new(Mutex::new(urls.into_iter().enumerate().collect()));
    let fetch_fn = Arc::new(fetch_fn);
    let (tx, rx) = mpsc::channel();

    for _ in 0..workers {
        let queue = Arc::clone(&queue);
        let fetch_fn = Arc::clone(&fetch_fn);
        let tx = tx.clone();
        thread::spawn(move || loop {
            let job = queue.lock().ok().and_then(|mut q| q.pop_front());
            let Some((index, url)) = job else { break };
            let result = fetch_fn(&url);
            if tx.send(FetchOutcome { index, url, result }).is_err() {
                break;
            }
        });
    }
    drop(tx);

    rx
}
