//! Windowless runs of the scanner and injector views
//!
//! Each function drives a view on the current tokio runtime, polling it the
//! way the UI would each frame, until its timeline is done.

use std::time::Duration;

use tokio::runtime::Handle;

use crate::core::config::AppConfig;
use crate::injector::{Currency, InjectorView};
use crate::scanner::{ScanResult, ScannerView};

/// How often the views are polled
pub const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Run one scan for `search` and return its results
pub async fn run_scan(runtime: &Handle, config: &AppConfig, search: &str) -> Vec<ScanResult> {
    let mut view = ScannerView::new(runtime.clone(), &config.scanner, &config.timing);
    view.scan_for(search);
    while view.is_scanning() {
        tokio::time::sleep(POLL_INTERVAL).await;
        view.pump();
    }
    view.results().to_vec()
}

/// Run one injection and return the full log
///
/// Returns an empty log when the form is blank. Lines are traced at `info`
/// as they arrive.
pub async fn run_injection(
    runtime: &Handle,
    config: &AppConfig,
    currency: Currency,
    username: &str,
    amount: &str,
) -> Vec<String> {
    let mut view = InjectorView::new(currency, runtime.clone(), &config.injector, &config.timing);
    view.username = username.to_string();
    view.amount = amount.to_string();

    if !view.generate() {
        tracing::warn!("username and amount must not be blank");
        return Vec::new();
    }

    let mut printed = 0;
    while view.is_generating() {
        tokio::time::sleep(POLL_INTERVAL).await;
        view.pump();
        for line in &view.log()[printed..] {
            tracing::info!("> {line}");
        }
        printed = view.log().len();
    }
    view.log().to_vec()
}
