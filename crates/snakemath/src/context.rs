//! Display configuration for rendering calculation results

/// Default number of decimal places shown to a reader.
pub const DEFAULT_PRECISION: usize = 4;

/// A calculation result that can be shown to a reader.
///
/// Every number goes through the context's formatter, so one `--precision`
/// setting applies to all output.
pub trait Render {
    /// Human-readable text for this result.
    fn render(&self, ctx: &DisplayContext) -> String;
}

/// Options controlling how results are presented.
///
/// The calculators themselves never read this; it is consumed by whatever
/// renders their results (the `snakemath` binary, a widget).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContext {
    /// Maximum decimal places for human-readable numbers
    pub precision: usize,

    /// Emit JSON instead of prose
    pub json: bool,
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            json: false,
        }
    }
}

impl DisplayContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom precision.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision,
            ..Default::default()
        }
    }

    /// Switch JSON output on or off (builder pattern)
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Round to `precision` places and drop trailing zeros.
    ///
    /// `format_number(36.869897)` with precision 2 gives `36.87`;
    /// `5.0` gives `5`.
    pub fn format_number(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let mut text = format!("{:.*}", self.precision, value);
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        if text == "-0" {
            text = "0".to_string();
        }
        text
    }

    /// Format a list of numbers joined by `separator`.
    pub fn format_list(&self, values: &[f64], separator: &str) -> String {
        values
            .iter()
            .map(|v| self.format_number(*v))
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Format an angle in degrees with a trailing degree sign.
    pub fn format_degrees(&self, degrees: f64) -> String {
        format!("{}°", self.format_number(degrees))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = DisplayContext::new();
        assert_eq!(ctx.precision, DEFAULT_PRECISION);
        assert!(!ctx.json);
        assert!(DisplayContext::with_precision(2).json(true).json);
    }

    #[test]
    fn test_format_number() {
        let ctx = DisplayContext::with_precision(2);
        assert_eq!(ctx.format_number(36.869897), "36.87");
        assert_eq!(ctx.format_number(5.0), "5");
        assert_eq!(ctx.format_number(0.5), "0.5");
        assert_eq!(ctx.format_number(-0.001), "0");
        assert_eq!(ctx.format_number(1200.0), "1200");
    }

    #[test]
    fn test_format_non_finite() {
        let ctx = DisplayContext::new();
        assert_eq!(ctx.format_number(f64::INFINITY), "∞");
        assert_eq!(ctx.format_number(f64::NEG_INFINITY), "-∞");
        assert_eq!(ctx.format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_list_and_degrees() {
        let ctx = DisplayContext::new();
        assert_eq!(ctx.format_list(&[1.0, 2.5, 3.0], " × "), "1 × 2.5 × 3");
        assert_eq!(ctx.format_degrees(53.130102), "53.1301°");
    }

    #[test]
    fn test_zero_precision() {
        let ctx = DisplayContext::with_precision(0);
        assert_eq!(ctx.format_number(2.6), "3");
        assert_eq!(ctx.format_number(120.0), "120");
    }
}
