pub mod label;
pub mod rows;
pub mod text;

/// Sentinel rendered in place of a value for terms whose geometry is
/// degenerate (coincident atoms, collinear chains).
pub const UNDEFINED_VALUE: &str = "undefined";

/// Formats a computed term value for display, four decimals.
pub(crate) fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => UNDEFINED_VALUE.to_string(),
    }
}
