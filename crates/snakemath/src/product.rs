//! Product-notation (∏) evaluation
//!
//! A product is a term generator applied to every integer in an inclusive
//! range, multiplied left to right starting from 1. Factors are kept in
//! iteration order so a widget can show the expanded product.
//!
//! Accumulation is `f64`. Long telescoping products drift away from their
//! closed form by a few ulps per factor; that is visible at high precision
//! and accepted for display purposes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::trace;

use crate::combinatorics::{factorial_approx, MAX_APPROX_FACTORIAL};
use crate::context::{DisplayContext, Render};
use crate::error::{MathError, Result};

/// Longest range a single evaluation will expand.
pub const MAX_PRODUCT_TERMS: i64 = 10_000;

/// The fixed set of term generators a product can range over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductExpression {
    /// `i`, giving `end! / (start-1)!`
    Factorial,
    /// `2i`
    Even,
    /// `2i - 1`
    Odd,
    /// `2^i`
    PowerOfTwo,
    /// `i / (i+1)`, which telescopes to `start / (end+1)`
    Telescoping,
}

impl ProductExpression {
    /// Every expression, in menu order.
    pub const ALL: [ProductExpression; 5] = [
        Self::Factorial,
        Self::Even,
        Self::Odd,
        Self::PowerOfTwo,
        Self::Telescoping,
    ];

    /// Canonical identifier, as accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            Self::Factorial => "factorial",
            Self::Even => "even",
            Self::Odd => "odd",
            Self::PowerOfTwo => "powers-of-2",
            Self::Telescoping => "telescoping",
        }
    }

    /// The term written in terms of the index `i`.
    pub fn notation(self) -> &'static str {
        match self {
            Self::Factorial => "i",
            Self::Even => "2i",
            Self::Odd => "(2i - 1)",
            Self::PowerOfTwo => "2^i",
            Self::Telescoping => "i/(i+1)",
        }
    }

    /// Evaluate the term at index `i`.
    pub fn term(self, i: i64) -> f64 {
        let x = i as f64;
        match self {
            Self::Factorial => x,
            Self::Even => 2.0 * x,
            Self::Odd => 2.0 * x - 1.0,
            Self::PowerOfTwo => 2f64.powf(x),
            Self::Telescoping => x / (x + 1.0),
        }
    }

    /// Closed-form value of the product over `start..=end`, where one is
    /// known and representable. Assumes a non-empty, positive range.
    pub fn closed_form(self, start: i64, end: i64) -> Option<f64> {
        let count = end - start + 1;
        let falling = || {
            if end > MAX_APPROX_FACTORIAL {
                return None;
            }
            let top = factorial_approx(end).ok()?;
            let bottom = factorial_approx(start - 1).ok()?;
            Some(top / bottom)
        };

        match self {
            Self::Factorial => falling(),
            Self::Even => falling().map(|f| 2f64.powf(count as f64) * f),
            Self::Odd => None,
            Self::PowerOfTwo => {
                let exponent = (start as f64 + end as f64) * count as f64 / 2.0;
                Some(2f64.powf(exponent))
            }
            Self::Telescoping => Some(start as f64 / (end as f64 + 1.0)),
        }
    }
}

impl fmt::Display for ProductExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProductExpression {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "factorial" => Ok(Self::Factorial),
            "even" => Ok(Self::Even),
            "odd" => Ok(Self::Odd),
            "powers-of-2" | "power-of-two" | "powers-of-two" => Ok(Self::PowerOfTwo),
            "telescoping" => Ok(Self::Telescoping),
            other => Err(MathError::input(format!(
                "unknown product expression '{}' (expected one of: {})",
                other,
                Self::ALL.map(Self::id).join(", ")
            ))),
        }
    }
}

/// Outcome of evaluating a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResult {
    /// Which generator was used
    pub expression: ProductExpression,
    /// First index (inclusive)
    pub start: i64,
    /// Last index (inclusive)
    pub end: i64,
    /// Evaluated factors in ascending index order
    pub factors: Vec<f64>,
    /// Left-to-right product of `factors`, 1 when empty
    pub product: f64,
    /// Exact closed-form value, when one exists for this expression
    pub closed_form: Option<f64>,
}

impl ProductResult {
    /// True if the range was empty (`start > end`).
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl Render for ProductResult {
    fn render(&self, ctx: &DisplayContext) -> String {
        let head = format!(
            "∏(i={}..{}) {}",
            self.start,
            self.end,
            self.expression.notation()
        );
        if self.is_empty() {
            return format!("{} = 1 (empty product)", head);
        }

        let product = ctx.format_number(self.product);
        let mut text = format!(
            "{} = {} = {}",
            head,
            ctx.format_list(&self.factors, " × "),
            product
        );
        // Only worth showing when accumulated drift survives rounding
        if let Some(closed) = self.closed_form.map(|v| ctx.format_number(v)) {
            if closed != product {
                text.push_str(&format!(" (closed form {})", closed));
            }
        }
        text
    }
}

impl fmt::Display for ProductResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplayContext::default()))
    }
}

/// Evaluate `∏ term(i)` for `i` in `start..=end`.
///
/// `start > end` is the empty product: no factors, product 1.
///
/// # Errors
///
/// Returns `Domain` if a non-empty range starts below 1, and `Input` if
/// the range has more than [`MAX_PRODUCT_TERMS`] terms.
///
/// # Examples
///
/// ```
/// use snakemath::product::{evaluate_product, ProductExpression};
///
/// let result = evaluate_product(ProductExpression::Factorial, 1, 5).unwrap();
/// assert_eq!(result.factors, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(result.product, 120.0);
/// ```
pub fn evaluate_product(
    expression: ProductExpression,
    start: i64,
    end: i64,
) -> Result<ProductResult> {
    if start > end {
        return Ok(ProductResult {
            expression,
            start,
            end,
            factors: Vec::new(),
            product: 1.0,
            closed_form: None,
        });
    }

    if start < 1 {
        return Err(MathError::domain(format!(
            "product bounds must be positive integers (start = {})",
            start
        )));
    }

    let count = end.saturating_sub(start).saturating_add(1);
    if count > MAX_PRODUCT_TERMS {
        return Err(MathError::input(format!(
            "product range has {} terms; at most {} are supported",
            count, MAX_PRODUCT_TERMS
        )));
    }

    trace!(%expression, start, end, count, "evaluating product");

    let factors: Vec<f64> = (start..=end).map(|i| expression.term(i)).collect();
    let product = factors.iter().fold(1.0, |acc, factor| acc * factor);

    Ok(ProductResult {
        expression,
        start,
        end,
        factors,
        product,
        closed_form: expression.closed_form(start, end),
    })
}

/// Parse `id` as a [`ProductExpression`] and evaluate it.
///
/// # Errors
///
/// Returns `Input` for an unknown identifier, otherwise as
/// [`evaluate_product`].
pub fn evaluate_product_by_id(id: &str, start: i64, end: i64) -> Result<ProductResult> {
    let expression: ProductExpression = id.parse()?;
    evaluate_product(expression, start, end)
}
