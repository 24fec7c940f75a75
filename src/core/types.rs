//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scan-local sequence number of a result
///
/// Ids restart at 0 on every scan, so they only identify a result within
/// the scan that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResultId(pub u32);

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Panel size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    pub width: f32,
    pub height: f32,
}

impl PanelSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for PanelSize {
    fn default() -> Self {
        Self::new(448.0, 600.0)
    }
}

/// Parse the leading base-10 integer of user-entered text
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits is read and anything after it is ignored (`"42abc"` -> 42,
/// `"1.5"` -> 1, `"1e3"` -> 1). Returns `None` when no digit follows the sign
/// or the digits overflow `i64`.
pub fn parse_integer(input: &str) -> Option<i64> {
    let text = input.trim_start();
    let sign_len = usize::from(text.starts_with(&['+', '-'][..]));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse::<i64>().ok()
}

/// Format an integer with comma thousands separators (`10000` -> `10,000`)
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
