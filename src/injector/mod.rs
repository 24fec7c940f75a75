//! Fake currency injector
//!
//! One view type serves both currency tabs. A run plays back the fixed
//! script in [`script`], one console line per elapsed delay.

pub mod script;

use serde::Serialize;
use tokio::runtime::Handle;

use crate::core::config::{InjectorConfig, TimingConfig};
use crate::sequence::{Timeline, TimelineEvent};

pub use script::LineKind;

/// Which currency a tab pretends to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Currency {
    Robux,
    Diamonds,
}

impl Currency {
    pub fn name(self) -> &'static str {
        match self {
            Currency::Robux => "Robux",
            Currency::Diamonds => "Diamonds",
        }
    }

    /// Heading shown above the form
    pub fn title(self) -> &'static str {
        match self {
            Currency::Robux => "Roblox Robux Generator",
            Currency::Diamonds => "Free Fire Diamond Injector",
        }
    }
}

/// State of a currency tab
pub struct InjectorView {
    currency: Currency,
    pub username: String,
    pub amount: String,
    log: Vec<String>,
    run: Option<Timeline<String>>,
    completed_runs: u32,
    timing: TimingConfig,
    runtime: Handle,
}

impl InjectorView {
    pub fn new(
        currency: Currency,
        runtime: Handle,
        config: &InjectorConfig,
        timing: &TimingConfig,
    ) -> Self {
        Self {
            currency,
            username: String::new(),
            amount: config.default_amount.clone(),
            log: Vec::new(),
            run: None,
            completed_runs: 0,
            timing: timing.clone(),
            runtime,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Whether the generate button should be enabled
    pub fn can_generate(&self) -> bool {
        !self.is_generating() && !self.username.trim().is_empty() && !self.amount.trim().is_empty()
    }

    /// Start a run with the current form contents
    ///
    /// Returns false without touching anything when the username or amount
    /// is blank or a run is already going.
    pub fn generate(&mut self) -> bool {
        if !self.can_generate() {
            return false;
        }

        self.log.clear();
        let steps = script::script_steps(
            self.currency,
            self.username.trim(),
            &self.amount,
            &self.timing,
        );
        tracing::info!(
            currency = self.currency.name(),
            username = self.username.trim(),
            "injection run started"
        );
        self.run = Some(Timeline::spawn(&self.runtime, "inject", steps));
        true
    }

    /// Append whatever lines the run has produced since the last call
    pub fn pump(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };

        let mut finished = false;
        for event in run.poll() {
            match event {
                TimelineEvent::Step(line) => self.log.push(line),
                TimelineEvent::Finished => finished = true,
            }
        }

        if finished {
            self.run = None;
            self.completed_runs += 1;
            tracing::info!(currency = self.currency.name(), "injection run complete");
        }
    }

    /// Abandon the current run; no further lines will arrive
    pub fn cancel(&mut self) {
        if let Some(mut run) = self.run.take() {
            run.cancel();
            tracing::info!(currency = self.currency.name(), "injection run cancelled");
        }
    }

    pub fn is_generating(&self) -> bool {
        self.run.is_some()
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn completed_runs(&self) -> u32 {
        self.completed_runs
    }
}
