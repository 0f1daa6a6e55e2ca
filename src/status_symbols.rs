//! Prefixes for status bar messages

/// Success indicator (✓)
pub const SUCCESS: &str = "✓";

/// Error indicator (✗)
pub const ERROR: &str = "✗";

/// Information indicator (ℹ)
pub const INFO: &str = "ℹ";

pub fn success(msg: &str) -> String {
    format!("{} {}", SUCCESS, msg)
}

pub fn error(msg: &str) -> String {
    format!("{} {}", ERROR, msg)
}

pub fn info(msg: &str) -> String {
    format!("{} {}", INFO, msg)
}

/// Summarizes a rejected submit, e.g. `✗ 2 fields need attention`.
pub fn rejected(count: usize) -> String {
    if count == 1 {
        error("1 field needs attention")
    } else {
        error(&format!("{} fields need attention", count))
    }
}
