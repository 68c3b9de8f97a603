//! Safe-score guard and percentage normalization shared by every scorer.

pub const MAX_PERCENT: f64 = 100.0;

/// Non-finite (NaN, ±inf) → 0. Applied before any arithmetic that feeds a report field.
pub fn safe_score(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Rounds a raw percentage into a report integer in `[0, 100]`.
pub fn clamp_percent(value: f64) -> u32 {
    safe_score(value).round().clamp(0.0, MAX_PERCENT) as u32
}

/// `[0, 1]` → integer-valued `[0, 100]`.
pub fn fraction_to_percent(value: f64) -> f64 {
    (safe_score(value) * MAX_PERCENT).round().clamp(0.0, MAX_PERCENT)
}

/// `[0, 100]` → integer-valued `[0, 100]`.
pub fn percent_to_percent(value: f64) -> f64 {
    safe_score(value).round().clamp(0.0, MAX_PERCENT)
}
