//! Result generation

use rand::Rng;

use super::ScanResult;
use crate::core::config::ScannerConfig;
use crate::core::types::ResultId;

/// Invent a batch of scan results
///
/// The batch size is drawn from `min_results..=max_results`. Every result
/// carries `search` as its value when given, otherwise its own random value
/// below `random_value_max`.
pub fn generate_results<R: Rng + ?Sized>(
    rng: &mut R,
    search: Option<i64>,
    config: &ScannerConfig,
) -> Vec<ScanResult> {
    let count = rng.gen_range(config.min_results..=config.max_results);

    (0..count)
        .map(|i| ScanResult {
            id: ResultId(i),
            address: format_address(rng.gen::<u32>()),
            value: match search {
                Some(value) => value,
                None => rng.gen_range(0..config.random_value_max),
            },
        })
        .collect()
}

/// `0x` plus the value as eight uppercase hex digits
pub fn format_address(raw: u32) -> String {
    format!("0x{:08X}", raw)
}
