//! Descriptive statistics for the data-set explorer

use indexmap::IndexMap;
use serde::Serialize;

use crate::context::{DisplayContext, Render};
use crate::error::{MathError, Result};

/// Summary of a data set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of values
    pub count: usize,
    /// Sum of all values
    pub sum: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Middle value; the mean of the two middle values for an even count
    pub median: f64,
    /// Most frequent values, ascending; empty when no value repeats
    pub modes: Vec<f64>,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// `max - min`
    pub range: f64,
    /// Mean squared deviation (divides by n)
    pub population_variance: f64,
    /// Unbiased variance (divides by n - 1); `None` for a single value
    pub sample_variance: Option<f64>,
    /// Square root of the population variance
    pub population_std_dev: f64,
    /// Square root of the sample variance
    pub sample_std_dev: Option<f64>,
}

impl Render for Summary {
    fn render(&self, ctx: &DisplayContext) -> String {
        let optional = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |x| ctx.format_number(x));
        let modes = if self.modes.is_empty() {
            "none".to_string()
        } else {
            ctx.format_list(&self.modes, ", ")
        };
        [
            format!("count = {}", self.count),
            format!("sum = {}", ctx.format_number(self.sum)),
            format!("mean = {}", ctx.format_number(self.mean)),
            format!("median = {}", ctx.format_number(self.median)),
            format!("mode = {}", modes),
            format!(
                "min = {}, max = {}, range = {}",
                ctx.format_number(self.min),
                ctx.format_number(self.max),
                ctx.format_number(self.range)
            ),
            format!(
                "variance: population = {}, sample = {}",
                ctx.format_number(self.population_variance),
                optional(self.sample_variance)
            ),
            format!(
                "std dev: population = {}, sample = {}",
                ctx.format_number(self.population_std_dev),
                optional(self.sample_std_dev)
            ),
        ]
        .join("\n")
    }
}

/// Summarize a data set.
///
/// # Errors
///
/// Returns `Input` for an empty slice and `Domain` if any value is NaN or
/// infinite.
pub fn describe(data: &[f64]) -> Result<Summary> {
    if data.is_empty() {
        return Err(MathError::input("need at least one value"));
    }
    if let Some(bad) = data.iter().find(|x| !x.is_finite()) {
        return Err(MathError::domain(format!(
            "data values must be finite numbers (got {})",
            bad
        )));
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let n = count as f64;
    let sum: f64 = sorted.iter().sum();
    let mean = sum / n;

    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let squared_deviations: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
    let population_variance = squared_deviations / n;
    let sample_variance = (count > 1).then(|| squared_deviations / (n - 1.0));

    let min = sorted[0];
    let max = sorted[count - 1];

    Ok(Summary {
        count,
        sum,
        mean,
        median,
        modes: modes(&sorted),
        min,
        max,
        range: max - min,
        population_variance,
        sample_variance,
        population_std_dev: population_variance.sqrt(),
        sample_std_dev: sample_variance.map(f64::sqrt),
    })
}

/// Values sharing the highest frequency, given data sorted ascending.
fn modes(sorted: &[f64]) -> Vec<f64> {
    // Keyed by bit pattern; -0.0 folds into 0.0. Insertion order follows
    // the sorted input, so the result is ascending.
    let mut frequencies: IndexMap<u64, (f64, usize)> = IndexMap::new();
    for &x in sorted {
        let x = if x == 0.0 { 0.0 } else { x };
        frequencies.entry(x.to_bits()).or_insert((x, 0)).1 += 1;
    }

    let highest = frequencies.values().map(|(_, n)| *n).max().unwrap_or(0);
    if highest < 2 {
        return Vec::new();
    }

    frequencies
        .values()
        .filter(|(_, n)| *n == highest)
        .map(|(x, _)| *x)
        .collect()
}

/// Parse a list of numbers separated by commas and/or whitespace.
///
/// # Errors
///
/// Returns `Input` naming the first token that is not a number.
pub fn parse_data(input: &str) -> Result<Vec<f64>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| MathError::input(format!("'{}' is not a number", token)))
        })
        .collect()
}
