//! Common test support utilities and fixtures

#![allow(dead_code)]

use anyhow::{Result, bail};
use async_trait::async_trait;
use forge_api::Label;
use forge_labels::labels::LabelSource;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory [`LabelSource`] that counts how often it is asked
pub struct StubSource {
    labels: Vec<Label>,
    delay: Option<Duration>,
    fail: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, String, u32)>>,
}

impl StubSource {
    pub fn new(labels: Vec<Label>) -> Self {
        Self {
            labels,
            delay: None,
            fail: false,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Source that always errors
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    /// Sleep before answering, widening the window for racing callers
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, String, u32)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LabelSource for StubSource {
    async fn list_labels(&self, owner: &str, repo: &str, page_size: u32) -> Result<Vec<Label>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((owner.to_string(), repo.to_string(), page_size));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            bail!("upstream unavailable");
        }
        Ok(self.labels.clone())
    }
}

/// The label set used throughout the resolver tests
pub fn sample_labels() -> Vec<Label> {
    vec![
        Label::new(47, "ready-to-merge"),
        Label::new(48, "ready-to-test"),
        Label::new(49, "ready-to-review"),
        Label::new(46, "in-review"),
        Label::new(1, "Bug"),
        Label::new(2, "enhancement"),
        Label::new(3, "duplicate"),
    ]
}

/// Turn string literals into the owned tokens the resolver takes
pub fn tokens(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}
