//! # SnakeMath
//!
//! The calculators behind SnakeMath's interactive widgets.
//!
//! Every function here is a pure, synchronous computation over numbers: it
//! either returns a complete result or fails with a [`MathError`]. Nothing
//! reads configuration, touches I/O or keeps state between calls, so the
//! presentation layer is free to call them on every slider movement.
//!
//! ## Modules
//!
//! - [`combinatorics`]: factorial, permutations, combinations
//! - [`product`]: product-notation (∏) evaluation
//! - [`triangle`]: right-triangle solver and special triangles
//! - [`statistics`]: descriptive statistics of a data set
//! - [`quadratic`]: roots, discriminant and vertex of a quadratic
//! - [`trig`]: unit-circle evaluation and angle conversion
//! - [`context`]: display options used when rendering results

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod combinatorics;
pub mod context;
pub mod error;
pub mod product;
pub mod quadratic;
pub mod statistics;
pub mod triangle;
pub mod trig;

// Re-export main types
pub use combinatorics::{combinations, factorial, factorial_approx, permutations};
pub use context::{DisplayContext, Render};
pub use error::{MathError, Result};
pub use product::{evaluate_product, evaluate_product_by_id, ProductExpression, ProductResult};
pub use quadratic::{solve_quadratic, Quadratic, Roots};
pub use statistics::{describe, parse_data, Summary};
pub use triangle::{
    solve_right_triangle, KnownValues, RightTriangle, SolveCase, SpecialTriangle,
    SPECIAL_TRIANGLES,
};
pub use trig::{evaluate_angle, TrigValues};

/// SnakeMath version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
