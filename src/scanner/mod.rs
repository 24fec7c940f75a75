//! Fake memory scanner
//!
//! Nothing here touches process memory. A scan waits out a fixed delay and
//! then invents a handful of address/value pairs. Results can be edited and
//! flagged as frozen; the freeze flag is only a label and never pins a
//! value.

pub mod generate;

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tokio::runtime::Handle;

use crate::core::config::{ScannerConfig, TimingConfig};
use crate::core::types::{parse_integer, ResultId};
use crate::sequence::{Step, Timeline, TimelineEvent};

pub use generate::generate_results;

/// Message shown in the editor after a successful save
pub const SAVE_MESSAGE: &str = "Value modified in memory!";

/// A single fabricated scan hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub id: ResultId,
    /// `0x` followed by eight uppercase hex digits
    pub address: String,
    pub value: i64,
}

/// Inline editor opened for the selected result
#[derive(Debug, Clone)]
pub struct ResultEditor {
    pub id: ResultId,
    /// Text the user is typing; starts at the result's value
    pub buffer: String,
    flash_until: Option<Instant>,
}

impl ResultEditor {
    fn new(result: &ScanResult) -> Self {
        Self {
            id: result.id,
            buffer: result.value.to_string(),
            flash_until: None,
        }
    }

    /// The save confirmation, if it is still visible at `now`
    pub fn flash(&self, now: Instant) -> Option<&'static str> {
        match self.flash_until {
            Some(until) if now < until => Some(SAVE_MESSAGE),
            _ => None,
        }
    }
}

/// State of the scanner tab
pub struct ScannerView {
    /// Search box contents
    pub search_input: String,
    results: Vec<ScanResult>,
    frozen: HashSet<ResultId>,
    editor: Option<ResultEditor>,
    pending: Option<PendingScan>,
    rng: ChaCha8Rng,
    config: ScannerConfig,
    timing: TimingConfig,
    runtime: Handle,
}

struct PendingScan {
    search: Option<i64>,
    timeline: Timeline<()>,
}

impl ScannerView {
    pub fn new(runtime: Handle, config: &ScannerConfig, timing: &TimingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            search_input: String::new(),
            results: Vec::new(),
            frozen: HashSet::new(),
            editor: None,
            pending: None,
            rng,
            config: config.clone(),
            timing: timing.clone(),
            runtime,
        }
    }

    /// Start a scan for whatever is in the search box
    pub fn scan(&mut self) {
        let input = self.search_input.clone();
        self.scan_for(&input);
    }

    /// Start a scan for `search_value`
    ///
    /// Does nothing while a scan is already running. Results appear after the
    /// configured delay, on a later [`ScannerView::pump`].
    pub fn scan_for(&mut self, search_value: &str) {
        if self.is_scanning() {
            return;
        }

        self.results.clear();
        self.frozen.clear();
        self.editor = None;

        let search = parse_integer(search_value);
        tracing::info!(?search, "scan started");

        let delay = self.timing.scaled(self.config.delay_ms);
        let timeline = Timeline::spawn(&self.runtime, "scan", vec![Step::new(delay, ())]);
        self.pending = Some(PendingScan { search, timeline });
    }

    /// Apply anything the scan timer has delivered since the last call
    pub fn pump(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        let done = pending
            .timeline
            .poll()
            .into_iter()
            .any(|event| matches!(event, TimelineEvent::Finished));

        if done {
            let search = pending.search;
            self.pending = None;
            self.results = generate_results(&mut self.rng, search, &self.config);
            tracing::info!(count = self.results.len(), "scan complete");
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn results(&self) -> &[ScanResult] {
        &self.results
    }

    pub fn result(&self, id: ResultId) -> Option<&ScanResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Overwrite a result's value
    ///
    /// Only the leading integer of `new_value` is used. Returns false (and
    /// changes nothing) when it has none or `id` is unknown.
    pub fn edit(&mut self, id: ResultId, new_value: &str) -> bool {
        let Some(value) = parse_integer(new_value) else {
            return false;
        };
        match self.results.iter_mut().find(|r| r.id == id) {
            Some(result) => {
                result.value = value;
                tracing::debug!(%id, value, "result edited");
                true
            }
            None => false,
        }
    }

    /// Flip the frozen label on a result
    pub fn toggle_freeze(&mut self, id: ResultId) {
        if !self.frozen.remove(&id) {
            self.frozen.insert(id);
        }
    }

    pub fn is_frozen(&self, id: ResultId) -> bool {
        self.frozen.contains(&id)
    }

    pub fn frozen(&self) -> &HashSet<ResultId> {
        &self.frozen
    }

    /// Toggle selection of a result, opening or closing its editor
    pub fn select(&mut self, id: ResultId) {
        if self.selected() == Some(id) {
            self.editor = None;
            return;
        }
        self.editor = self.result(id).map(ResultEditor::new);
    }

    pub fn selected(&self) -> Option<ResultId> {
        self.editor.as_ref().map(|e| e.id)
    }

    pub fn editor(&self) -> Option<&ResultEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut ResultEditor> {
        self.editor.as_mut()
    }

    /// Save the editor buffer into its result
    ///
    /// On success the confirmation message stays up for the configured time.
    pub fn save_editor(&mut self, now: Instant) -> bool {
        let Some((id, buffer)) = self.editor.as_ref().map(|e| (e.id, e.buffer.clone())) else {
            return false;
        };
        if !self.edit(id, &buffer) {
            return false;
        }
        let flash = Duration::from_millis(self.config.save_flash_ms);
        if let Some(editor) = self.editor.as_mut() {
            editor.flash_until = Some(now + flash);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ScannerView {
        let config = ScannerConfig {
            seed: Some(42),
            ..ScannerConfig::default()
        };
        ScannerView::new(Handle::current(), &config, &TimingConfig::default())
    }

    async fn scanned(search: &str) -> ScannerView {
        let mut view = view();
        view.scan_for(search);
        tokio::time::sleep(Duration::from_millis(1600)).await;
        view.pump();
        view
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_arrive_after_delay() {
        let mut view = view();
        view.scan_for("100");
        assert!(view.is_scanning());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        view.pump();
        assert!(view.is_scanning());
        assert!(view.results().is_empty());

        tokio::time::sleep(Duration::from_millis(600)).await;
        view.pump();
        assert!(!view.is_scanning());
        assert!((5..=14).contains(&view.results().len()));
        assert!(view.results().iter().all(|r| r.value == 100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_ignored_while_scanning() {
        let mut view = view();
        view.scan_for("1");
        tokio::time::sleep(Duration::from_millis(1000)).await;
        view.scan_for("2");

        tokio::time::sleep(Duration::from_millis(600)).await;
        view.pump();
        assert!(view.results().iter().all(|r| r.value == 1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_updates_only_target() {
        let mut view = scanned("7").await;
        let before: Vec<i64> = view.results().iter().map(|r| r.value).collect();

        assert!(view.edit(ResultId(1), "999"));

        for (i, result) in view.results().iter().enumerate() {
            if result.id == ResultId(1) {
                assert_eq!(result.value, 999);
            } else {
                assert_eq!(result.value, before[i]);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_edit_is_noop() {
        let mut view = scanned("7").await;

        assert!(!view.edit(ResultId(0), "abc"));
        assert!(!view.edit(ResultId(0), ""));
        assert!(!view.edit(ResultId(500), "1"));
        assert_eq!(view.result(ResultId(0)).unwrap().value, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_keeps_leading_integer() {
        let mut view = scanned("7").await;

        assert!(view.edit(ResultId(0), "42abc"));
        assert_eq!(view.result(ResultId(0)).unwrap().value, 42);

        assert!(view.edit(ResultId(1), "1.5"));
        assert_eq!(view.result(ResultId(1)).unwrap().value, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_uses_leading_integer() {
        let view = scanned("1e3").await;
        assert!(view.results().iter().all(|r| r.value == 1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_freeze_toggles_back() {
        let mut view = scanned("7").await;

        view.toggle_freeze(ResultId(2));
        assert!(view.is_frozen(ResultId(2)));
        view.toggle_freeze(ResultId(2));
        assert!(!view.is_frozen(ResultId(2)));
        assert!(view.frozen().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_frozen_value_can_still_be_edited() {
        let mut view = scanned("7").await;

        view.toggle_freeze(ResultId(0));
        assert!(view.edit(ResultId(0), "8"));
        assert_eq!(view.result(ResultId(0)).unwrap().value, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_scan_clears_state() {
        let mut view = scanned("7").await;
        view.toggle_freeze(ResultId(0));
        view.select(ResultId(0));

        view.scan_for("3");
        assert!(view.results().is_empty());
        assert!(view.frozen().is_empty());
        assert_eq!(view.selected(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_toggles_editor() {
        let mut view = scanned("55").await;

        view.select(ResultId(1));
        assert_eq!(view.selected(), Some(ResultId(1)));
        assert_eq!(view.editor().unwrap().buffer, "55");

        view.select(ResultId(1));
        assert_eq!(view.selected(), None);

        view.select(ResultId(9999));
        assert_eq!(view.selected(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_editor_flashes_message() {
        let mut view = scanned("55").await;
        view.select(ResultId(0));
        view.editor_mut().unwrap().buffer = "123".into();

        let now = Instant::now();
        assert!(view.save_editor(now));
        assert_eq!(view.result(ResultId(0)).unwrap().value, 123);

        let editor = view.editor().unwrap();
        assert_eq!(editor.flash(now), Some(SAVE_MESSAGE));
        assert_eq!(editor.flash(now + Duration::from_millis(2001)), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_editor_rejects_bad_input() {
        let mut view = scanned("55").await;
        view.select(ResultId(0));
        view.editor_mut().unwrap().buffer = "nope".into();

        let now = Instant::now();
        assert!(!view.save_editor(now));
        assert_eq!(view.result(ResultId(0)).unwrap().value, 55);
        assert_eq!(view.editor().unwrap().flash(now), None);
    }
}
