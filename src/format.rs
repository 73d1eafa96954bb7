//! Compact human-readable duration rendering

use crate::constants::{DAY_SECONDS, HOUR_SECONDS};

/// Unit table walked in descending order: days, hours, minutes, seconds
const UNITS: [(u64, &str); 4] = [
    (DAY_SECONDS as u64, "天"),
    (HOUR_SECONDS as u64, "小时"),
    (60, "分"),
    (1, "秒"),
];

/// Render a second count as a compact `{d}天{h}小时{m}分{s}秒` string.
///
/// Each unit is emitted only when the remaining seconds reach it, so `0`
/// renders as the empty string, `60` as `1分` (not `1分0秒`) and `86400`
/// as `1天`.
pub fn translate_secs(seconds: u64) -> String {
    let mut remaining = seconds;
    let mut output = String::new();
    for (unit, label) in UNITS {
        if remaining >= unit {
            output.push_str(&format!("{}{}", remaining / unit, label));
        }
        remaining %= unit;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_empty() {
        assert_eq!(translate_secs(0), "");
    }

    #[test]
    fn interior_zero_units_are_skipped() {
        assert_eq!(translate_secs(86_460), "1天1分");
        assert_eq!(translate_secs(3_601), "1小时1秒");
    }
}
