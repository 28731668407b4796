//! Quadratic equations `ax² + bx + c = 0`

use std::fmt;

use serde::Serialize;

use crate::context::{DisplayContext, Render};
use crate::error::{MathError, Result};

/// Roots of a quadratic, classified by the sign of the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Roots {
    /// Two distinct real roots, `low < high`
    TwoReal {
        /// Smaller root
        low: f64,
        /// Larger root
        high: f64,
    },
    /// One repeated real root
    Repeated {
        /// The double root
        root: f64,
    },
    /// Complex-conjugate pair `real ± imaginary·i`
    Complex {
        /// Shared real part
        real: f64,
        /// Positive imaginary part
        imaginary: f64,
    },
}

impl Render for Roots {
    fn render(&self, ctx: &DisplayContext) -> String {
        match *self {
            Self::TwoReal { low, high } => format!(
                "x = {}, x = {}",
                ctx.format_number(low),
                ctx.format_number(high)
            ),
            Self::Repeated { root } => format!("x = {} (double root)", ctx.format_number(root)),
            Self::Complex { real, imaginary } => format!(
                "x = {} ± {}i",
                ctx.format_number(real),
                ctx.format_number(imaginary)
            ),
        }
    }
}

impl fmt::Display for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplayContext::default()))
    }
}

/// A solved quadratic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quadratic {
    /// Coefficient of x²
    pub a: f64,
    /// Coefficient of x
    pub b: f64,
    /// Constant term
    pub c: f64,
    /// `b² - 4ac`
    pub discriminant: f64,
    /// The roots
    pub roots: Roots,
    /// Turning point `(x, y)` of the parabola
    pub vertex: (f64, f64),
}

impl Quadratic {
    /// The axis of symmetry `x = -b/2a`.
    pub fn axis_of_symmetry(&self) -> f64 {
        self.vertex.0
    }

    /// True if the parabola opens upward.
    pub fn opens_upward(&self) -> bool {
        self.a > 0.0
    }

    /// Evaluate the polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

impl Render for Quadratic {
    fn render(&self, ctx: &DisplayContext) -> String {
        [
            format!("discriminant = {}", ctx.format_number(self.discriminant)),
            self.roots.render(ctx),
            format!(
                "vertex = ({}, {}), opens {}",
                ctx.format_number(self.vertex.0),
                ctx.format_number(self.vertex.1),
                if self.opens_upward() { "upward" } else { "downward" }
            ),
        ]
        .join("\n")
    }
}

/// Solve `ax² + bx + c = 0`.
///
/// Real roots use the cancellation-free form `q = -(b + sign(b)·√D)/2`,
/// `x₁ = q/a`, `x₂ = c/q`.
///
/// # Errors
///
/// Returns `Domain` if `a` is zero, any coefficient is not finite, or the
/// discriminant, roots or vertex overflow `f64`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<Quadratic> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(MathError::domain("coefficients must be finite numbers"));
    }
    if a == 0.0 {
        return Err(MathError::domain(
            "a must be non-zero (with a = 0 the equation is linear)",
        ));
    }

    let discriminant = b * b - 4.0 * a * c;
    if !discriminant.is_finite() {
        return Err(MathError::domain(format!(
            "coefficients too large: b² - 4ac overflows (a = {}, b = {}, c = {})",
            a, b, c
        )));
    }
    let vertex_x = -b / (2.0 * a);

    let roots = if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        let q = -0.5 * (b + b.signum() * sqrt_d);
        // b == 0 gives q = -0.5·√D, still non-zero because D > 0
        let (x1, x2) = (q / a, c / q);
        Roots::TwoReal {
            low: x1.min(x2),
            high: x1.max(x2),
        }
    } else if discriminant == 0.0 {
        Roots::Repeated { root: vertex_x }
    } else {
        Roots::Complex {
            real: vertex_x,
            imaginary: (-discriminant).sqrt() / (2.0 * a).abs(),
        }
    };

    let vertex_y = (a * vertex_x + b) * vertex_x + c;

    let parts = match roots {
        Roots::TwoReal { low, high } => [low, high],
        Roots::Repeated { root } => [root, root],
        Roots::Complex { real, imaginary } => [real, imaginary],
    };
    if !parts.iter().chain([vertex_x, vertex_y].iter()).all(|x| x.is_finite()) {
        return Err(MathError::domain(format!(
            "roots or vertex fall outside the representable range (a = {}, b = {}, c = {})",
            a, b, c
        )));
    }

    Ok(Quadratic {
        a,
        b,
        c,
        discriminant,
        roots,
        vertex: (vertex_x, vertex_y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_real_roots() {
        let q = solve_quadratic(1.0, -3.0, 2.0).unwrap();
        assert_eq!(q.discriminant, 1.0);
        assert_eq!(q.roots, Roots::TwoReal { low: 1.0, high: 2.0 });
        assert_eq!(q.vertex, (1.5, -0.25));
        assert!(q.opens_upward());
    }

    #[test]
    fn test_repeated_root() {
        let q = solve_quadratic(1.0, -2.0, 1.0).unwrap();
        assert_eq!(q.roots, Roots::Repeated { root: 1.0 });
        assert_eq!(q.evaluate(1.0), 0.0);
    }

    #[test]
    fn test_complex_roots() {
        let q = solve_quadratic(1.0, 0.0, 1.0).unwrap();
        assert_eq!(q.discriminant, -4.0);
        assert_eq!(
            q.roots,
            Roots::Complex {
                real: 0.0,
                imaginary: 1.0
            }
        );
    }

    #[test]
    fn test_negative_leading_coefficient() {
        let q = solve_quadratic(-1.0, 0.0, 4.0).unwrap();
        assert_eq!(q.roots, Roots::TwoReal { low: -2.0, high: 2.0 });
        assert!(!q.opens_upward());
        assert_eq!(q.axis_of_symmetry(), 0.0);
    }

    #[test]
    fn test_cancellation_free_small_root() {
        // Naive (-b + √D)/2a loses every digit of the small root here
        let q = solve_quadratic(1.0, 1e8, 1.0).unwrap();
        match q.roots {
            Roots::TwoReal { high, .. } => assert!((high + 1e-8).abs() < 1e-20),
            other => panic!("expected two real roots, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_coefficients() {
        let err = solve_quadratic(1.0, 1e200, 1.0).unwrap_err();
        assert!(matches!(err, MathError::Domain(ref m) if m.contains("overflows")));

        // -b/2a overflows even though b² - 4ac stays finite
        assert!(matches!(
            solve_quadratic(1e-300, 1e10, 0.0),
            Err(MathError::Domain(_))
        ));
    }

    #[test]
    fn test_not_quadratic() {
        assert!(matches!(solve_quadratic(0.0, 2.0, 1.0), Err(MathError::Domain(_))));
        assert!(solve_quadratic(1.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_display() {
        let q = solve_quadratic(1.0, -3.0, 2.0).unwrap();
        assert_eq!(q.roots.to_string(), "x = 1, x = 2");
    }

    #[test]
    fn test_render() {
        let q = solve_quadratic(1.0, -3.0, 2.0).unwrap();
        assert_eq!(
            q.render(&DisplayContext::new()),
            "discriminant = 1\nx = 1, x = 2\nvertex = (1.5, -0.25), opens upward"
        );

        let complex = solve_quadratic(-1.0, 0.0, -2.0).unwrap();
        let text = complex.render(&DisplayContext::with_precision(2));
        assert!(text.contains("x = 0 ± 1.41i"));
        assert!(text.ends_with("opens downward"));
    }
}
