//! The injection script
//!
//! A fixed, linear list of console lines and the pause before each one.

use std::time::Duration;

use crate::core::config::TimingConfig;
use crate::core::types::{group_thousands, parse_integer};
use crate::sequence::Step;

use super::Currency;

/// Nominal delay (ms) before each scripted line, in order
pub const STEP_DELAYS_MS: [u64; 12] = [
    500, 1000, 800, 1200, 500, 1500, 500, 2000, 1000, 1500, 1000, 500,
];

/// Build the console lines for one run
pub fn script_lines(currency: Currency, username: &str, amount: &str) -> Vec<String> {
    let name = currency.name();
    let amount = display_amount(amount);

    vec![
        format!("[INFO] Initializing injection sequence for {name}..."),
        "[AUTH] Authenticating with game servers...".to_string(),
        "[SUCCESS] Connection established.".to_string(),
        format!("[TARGET] User found: {username}"),
        format!("[INFO] Preparing to inject {amount} {name}."),
        "[WARN] Bypassing anti-cheat protocols...".to_string(),
        "[... ] This might take a moment.".to_string(),
        "[SUCCESS] Security bypassed.".to_string(),
        format!("[INJECT] Writing {name} to user account..."),
        "[DONE] Injection complete!".to_string(),
        "[VERIFY] Simulation only: no currency was transferred.".to_string(),
        "[INFO] Nothing in your game account has changed.".to_string(),
    ]
}

/// Pair each scripted line with its (scaled) delay
pub fn script_steps(
    currency: Currency,
    username: &str,
    amount: &str,
    timing: &TimingConfig,
) -> Vec<Step<String>> {
    script_lines(currency, username, amount)
        .into_iter()
        .zip(STEP_DELAYS_MS)
        .map(|(line, ms)| Step::new(timing.scaled(ms), line))
        .collect()
}

/// Total unscaled length of one run
pub fn nominal_duration() -> Duration {
    Duration::from_millis(STEP_DELAYS_MS.iter().sum())
}

/// Amount as shown in the log: grouped when numeric, verbatim otherwise
fn display_amount(amount: &str) -> String {
    match parse_integer(amount) {
        Some(n) => group_thousands(n),
        None => amount.trim().to_string(),
    }
}

/// How a console line is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Success,
    Warning,
    Plain,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if line.starts_with("[SUCCESS]") || line.starts_with("[DONE]") {
            LineKind::Success
        } else if line.starts_with("[WARN]") {
            LineKind::Warning
        } else {
            LineKind::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_delays_match_up() {
        let lines = script_lines(Currency::Robux, "neo", "10000");
        assert_eq!(lines.len(), STEP_DELAYS_MS.len());
    }

    #[test]
    fn test_interpolation() {
        let lines = script_lines(Currency::Diamonds, "neo", "10000");
        assert_eq!(lines[0], "[INFO] Initializing injection sequence for Diamonds...");
        assert_eq!(lines[3], "[TARGET] User found: neo");
        assert_eq!(lines[4], "[INFO] Preparing to inject 10,000 Diamonds.");
        assert_eq!(lines[8], "[INJECT] Writing Diamonds to user account...");
    }

    #[test]
    fn test_non_numeric_amount_kept_verbatim() {
        let lines = script_lines(Currency::Robux, "neo", "lots");
        assert_eq!(lines[4], "[INFO] Preparing to inject lots Robux.");
    }

    #[test]
    fn test_steps_use_time_scale() {
        let timing = TimingConfig { time_scale: 0.5 };
        let steps = script_steps(Currency::Robux, "neo", "1", &timing);
        assert_eq!(steps[0].delay, Duration::from_millis(250));
        assert_eq!(steps[7].delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_nominal_duration() {
        assert_eq!(nominal_duration(), Duration::from_millis(12000));
    }

    #[test]
    fn test_line_kind() {
        assert_eq!(LineKind::of("[SUCCESS] Security bypassed."), LineKind::Success);
        assert_eq!(LineKind::of("[DONE] Injection complete!"), LineKind::Success);
        assert_eq!(LineKind::of("[WARN] Bypassing anti-cheat protocols..."), LineKind::Warning);
        assert_eq!(LineKind::of("[INFO] hi"), LineKind::Plain);
    }
}
