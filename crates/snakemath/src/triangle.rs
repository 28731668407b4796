//! Right-triangle solver
//!
//! Sides `a` and `b` are the legs, `c` the hypotenuse. Angle `A` is opposite
//! `a`, angle `B` opposite `b`; both are in degrees and `B = 90 - A`.
//!
//! The solver dispatches on which two of `{a, b, c, A}` are known. `B` is
//! never an input: it is fully determined by `A`, so accepting it would only
//! open the door to contradictory records.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::{DisplayContext, Render};
use crate::error::{MathError, Result};
use crate::trig::{to_degrees, to_radians};

const NEED_TWO_VALUES: &str =
    "need two values, at least one a side (any two of a, b, c and angle A)";

/// The values a caller knows about a right triangle.
///
/// Every field is optional. `angle_b` is carried for completeness of the
/// record but ignored by [`solve_right_triangle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KnownValues {
    /// Leg opposite angle A
    pub a: Option<f64>,
    /// Leg opposite angle B
    pub b: Option<f64>,
    /// Hypotenuse
    pub c: Option<f64>,
    /// Angle A in degrees
    pub angle_a: Option<f64>,
    /// Angle B in degrees (informational only)
    pub angle_b: Option<f64>,
}

impl KnownValues {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set leg `a` (builder pattern)
    pub fn with_a(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }

    /// Set leg `b` (builder pattern)
    pub fn with_b(mut self, b: f64) -> Self {
        self.b = Some(b);
        self
    }

    /// Set hypotenuse `c` (builder pattern)
    pub fn with_c(mut self, c: f64) -> Self {
        self.c = Some(c);
        self
    }

    /// Set angle `A` in degrees (builder pattern)
    pub fn with_angle_a(mut self, degrees: f64) -> Self {
        self.angle_a = Some(degrees);
        self
    }

    /// Set angle `B` in degrees (builder pattern)
    pub fn with_angle_b(mut self, degrees: f64) -> Self {
        self.angle_b = Some(degrees);
        self
    }
}

/// Which pair of known values a triangle was solved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveCase {
    /// Both legs
    Legs,
    /// Leg `a` and the hypotenuse
    LegAHypotenuse,
    /// Leg `b` and the hypotenuse
    LegBHypotenuse,
    /// Hypotenuse and angle A
    HypotenuseAngle,
    /// Leg `a` (opposite) and angle A
    OppositeAngle,
    /// Leg `b` (adjacent) and angle A
    AdjacentAngle,
}

impl fmt::Display for SolveCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Legs => "a, b",
            Self::LegAHypotenuse => "a, c",
            Self::LegBHypotenuse => "b, c",
            Self::HypotenuseAngle => "c, A",
            Self::OppositeAngle => "a, A",
            Self::AdjacentAngle => "b, A",
        };
        f.write_str(name)
    }
}

/// A fully determined right triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RightTriangle {
    /// Leg opposite angle A
    pub a: f64,
    /// Leg opposite angle B
    pub b: f64,
    /// Hypotenuse
    pub c: f64,
    /// Angle A in degrees
    pub angle_a: f64,
    /// Angle B in degrees, always `90 - angle_a`
    pub angle_b: f64,
}

/// SOHCAHTOA ratios of angle A.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrigRatios {
    /// opposite / hypotenuse
    pub sin: f64,
    /// adjacent / hypotenuse
    pub cos: f64,
    /// opposite / adjacent
    pub tan: f64,
}

impl RightTriangle {
    fn from_sides_and_angle(a: f64, b: f64, c: f64, angle_a: f64) -> Self {
        Self {
            a,
            b,
            c,
            angle_a,
            angle_b: 90.0 - angle_a,
        }
    }

    /// Half the product of the legs.
    pub fn area(&self) -> f64 {
        self.a * self.b / 2.0
    }

    /// Sum of all three sides.
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Sine, cosine and tangent of angle A, read off the side lengths.
    pub fn ratios(&self) -> TrigRatios {
        TrigRatios {
            sin: self.a / self.c,
            cos: self.b / self.c,
            tan: self.a / self.b,
        }
    }
}

impl Render for RightTriangle {
    fn render(&self, ctx: &DisplayContext) -> String {
        let ratios = self.ratios();
        [
            format!("a = {}", ctx.format_number(self.a)),
            format!("b = {}", ctx.format_number(self.b)),
            format!("c = {}", ctx.format_number(self.c)),
            format!("A = {}", ctx.format_degrees(self.angle_a)),
            format!("B = {}", ctx.format_degrees(self.angle_b)),
            format!("area = {}", ctx.format_number(self.area())),
            format!("perimeter = {}", ctx.format_number(self.perimeter())),
            format!(
                "sin A = {}, cos A = {}, tan A = {}",
                ctx.format_number(ratios.sin),
                ctx.format_number(ratios.cos),
                ctx.format_number(ratios.tan)
            ),
        ]
        .join("\n")
    }
}

/// Solve a right triangle from two known values.
///
/// # Errors
///
/// - `Input` unless exactly two of `{a, b, c, A}` are given, at least one
///   of them a side.
/// - `Domain` if a side is not a positive finite number, if angle A is not
///   strictly between 0 and 90 degrees, or if the hypotenuse does not
///   exceed the given leg.
///
/// # Examples
///
/// ```
/// use snakemath::triangle::{solve_right_triangle, KnownValues};
///
/// let t = solve_right_triangle(&KnownValues::new().with_a(3.0).with_b(4.0)).unwrap();
/// assert_eq!(t.c, 5.0);
/// assert!((t.angle_a - 36.87).abs() < 0.01);
/// ```
pub fn solve_right_triangle(known: &KnownValues) -> Result<RightTriangle> {
    let (case, triangle) = solve_with_case(known)?;
    debug!(%case, ?triangle, "solved right triangle");
    Ok(triangle)
}

/// Like [`solve_right_triangle`], also reporting which case was used.
pub fn solve_with_case(known: &KnownValues) -> Result<(SolveCase, RightTriangle)> {
    let solved = match (known.a, known.b, known.c, known.angle_a) {
        (Some(a), Some(b), None, None) => {
            let (a, b) = (side("a", a)?, side("b", b)?);
            let c = a.hypot(b);
            let angle_a = to_degrees((a / b).atan());
            (SolveCase::Legs, RightTriangle::from_sides_and_angle(a, b, c, angle_a))
        }
        (Some(a), None, Some(c), None) => {
            let (a, c) = (side("a", a)?, side("c", c)?);
            hypotenuse_exceeds(c, a, "a")?;
            let b = other_leg(c, a);
            let angle_a = to_degrees((a / c).asin());
            (
                SolveCase::LegAHypotenuse,
                RightTriangle::from_sides_and_angle(a, b, c, angle_a),
            )
        }
        (None, Some(b), Some(c), None) => {
            let (b, c) = (side("b", b)?, side("c", c)?);
            hypotenuse_exceeds(c, b, "b")?;
            let a = other_leg(c, b);
            let angle_a = to_degrees((b / c).acos());
            (
                SolveCase::LegBHypotenuse,
                RightTriangle::from_sides_and_angle(a, b, c, angle_a),
            )
        }
        (None, None, Some(c), Some(angle_a)) => {
            let (c, angle_a) = (side("c", c)?, acute_angle(angle_a)?);
            let radians = to_radians(angle_a);
            let a = c * radians.sin();
            let b = c * radians.cos();
            (
                SolveCase::HypotenuseAngle,
                RightTriangle::from_sides_and_angle(a, b, c, angle_a),
            )
        }
        (Some(a), None, None, Some(angle_a)) => {
            let (a, angle_a) = (side("a", a)?, acute_angle(angle_a)?);
            let radians = to_radians(angle_a);
            let c = a / radians.sin();
            let b = a / radians.tan();
            (
                SolveCase::OppositeAngle,
                RightTriangle::from_sides_and_angle(a, b, c, angle_a),
            )
        }
        (None, Some(b), None, Some(angle_a)) => {
            let (b, angle_a) = (side("b", b)?, acute_angle(angle_a)?);
            let radians = to_radians(angle_a);
            let c = b / radians.cos();
            let a = b * radians.tan();
            (
                SolveCase::AdjacentAngle,
                RightTriangle::from_sides_and_angle(a, b, c, angle_a),
            )
        }
        _ => {
            debug!(?known, "no admissible pair of known values");
            return Err(MathError::input(NEED_TWO_VALUES));
        }
    };

    representable(&solved.1)?;
    Ok(solved)
}

/// `√(c² - leg²)` without squaring either length.
fn other_leg(c: f64, leg: f64) -> f64 {
    let ratio = leg / c;
    c * ((1.0 - ratio) * (1.0 + ratio)).sqrt()
}

/// Every derived length must still be a positive finite `f64`.
fn representable(triangle: &RightTriangle) -> Result<()> {
    let sides = [("a", triangle.a), ("b", triangle.b), ("c", triangle.c)];
    match sides.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
        None => Ok(()),
        Some((name, value)) => {
            debug!(?triangle, "derived side out of range");
            Err(MathError::domain(format!(
                "side {} is outside the representable range (got {})",
                name, value
            )))
        }
    }
}

fn side(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MathError::domain(format!(
            "side {} must be a positive number (got {})",
            name, value
        )))
    }
}

fn acute_angle(degrees: f64) -> Result<f64> {
    if degrees.is_finite() && degrees > 0.0 && degrees < 90.0 {
        Ok(degrees)
    } else {
        Err(MathError::domain(format!(
            "angle A must be strictly between 0 and 90 degrees (got {})",
            degrees
        )))
    }
}

fn hypotenuse_exceeds(c: f64, leg: f64, leg_name: &str) -> Result<()> {
    if c > leg {
        Ok(())
    } else {
        Err(MathError::domain(format!(
            "hypotenuse must exceed leg (c = {}, {} = {})",
            c, leg_name, leg
        )))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Special Triangles
// ═══════════════════════════════════════════════════════════════════════

/// A right triangle whose side ratios are worth memorizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpecialTriangle {
    /// Identifier, e.g. `30-60-90`
    pub name: &'static str,
    /// Angles opposite a, b and c, in degrees
    pub angles: [f64; 3],
    /// Ratios a : b : c as written on the page
    pub ratio_labels: [&'static str; 3],
    /// Ratios a : b : c with the shortest leg scaled to 1
    pub ratios: [f64; 3],
}

/// `√3` as an `f64`, for use in constants.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The 30-60-90 and 45-45-90 triangles.
pub static SPECIAL_TRIANGLES: [SpecialTriangle; 2] = [
    SpecialTriangle {
        name: "30-60-90",
        angles: [30.0, 60.0, 90.0],
        ratio_labels: ["1", "√3", "2"],
        ratios: [1.0, SQRT_3, 2.0],
    },
    SpecialTriangle {
        name: "45-45-90",
        angles: [45.0, 45.0, 90.0],
        ratio_labels: ["1", "1", "√2"],
        ratios: [1.0, 1.0, std::f64::consts::SQRT_2],
    },
];

impl SpecialTriangle {
    /// Look up a special triangle by name (`30-60-90` or `45-45-90`).
    pub fn lookup(name: &str) -> Result<&'static SpecialTriangle> {
        SPECIAL_TRIANGLES
            .iter()
            .find(|t| t.name == name.trim())
            .ok_or_else(|| {
                MathError::input(format!(
                    "unknown special triangle '{}' (expected 30-60-90 or 45-45-90)",
                    name
                ))
            })
    }

    /// Build the concrete triangle whose shortest leg is `short_leg`.
    ///
    /// # Errors
    ///
    /// Returns `Domain` if `short_leg` is not a positive finite number.
    pub fn scale(&self, short_leg: f64) -> Result<RightTriangle> {
        let k = side("short leg", short_leg)?;
        Ok(RightTriangle::from_sides_and_angle(
            self.ratios[0] * k,
            self.ratios[1] * k,
            self.ratios[2] * k,
            self.angles[0],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_legs() {
        let t = solve_right_triangle(&KnownValues::new().with_a(3.0).with_b(4.0)).unwrap();
        assert_eq!(t.c, 5.0);
        assert!(close(t.angle_a, 36.87, 0.01));
        assert!(close(t.angle_b, 53.13, 0.01));
    }

    #[test]
    fn test_leg_and_hypotenuse() {
        let (case, t) = solve_with_case(&KnownValues::new().with_a(3.0).with_c(5.0)).unwrap();
        assert_eq!(case, SolveCase::LegAHypotenuse);
        assert!(close(t.b, 4.0, 1e-12));

        let (case, t) = solve_with_case(&KnownValues::new().with_b(4.0).with_c(5.0)).unwrap();
        assert_eq!(case, SolveCase::LegBHypotenuse);
        assert!(close(t.a, 3.0, 1e-12));
        assert!(close(t.angle_a, 36.8699, 1e-4));
    }

    #[test]
    fn test_hypotenuse_must_exceed_leg() {
        let err = solve_right_triangle(&KnownValues::new().with_a(5.0).with_c(3.0)).unwrap_err();
        assert!(matches!(err, MathError::Domain(ref m) if m.contains("hypotenuse must exceed leg")));

        let equal = solve_right_triangle(&KnownValues::new().with_b(5.0).with_c(5.0));
        assert!(matches!(equal, Err(MathError::Domain(_))));
    }

    #[test]
    fn test_angle_cases() {
        let t = solve_right_triangle(&KnownValues::new().with_c(2.0).with_angle_a(30.0)).unwrap();
        assert!(close(t.a, 1.0, 1e-12));
        assert!(close(t.b, SQRT_3, 1e-12));
        assert_eq!(t.angle_b, 60.0);

        let t = solve_right_triangle(&KnownValues::new().with_a(1.0).with_angle_a(45.0)).unwrap();
        assert!(close(t.b, 1.0, 1e-12));
        assert!(close(t.c, std::f64::consts::SQRT_2, 1e-12));

        let t = solve_right_triangle(&KnownValues::new().with_b(1.0).with_angle_a(60.0)).unwrap();
        assert!(close(t.a, SQRT_3, 1e-12));
        assert!(close(t.c, 2.0, 1e-12));
    }

    #[test]
    fn test_degenerate_angles() {
        let zero = solve_right_triangle(&KnownValues::new().with_a(1.0).with_angle_a(0.0));
        assert!(matches!(zero, Err(MathError::Domain(_))));

        let right = solve_right_triangle(&KnownValues::new().with_b(1.0).with_angle_a(90.0));
        assert!(matches!(right, Err(MathError::Domain(_))));
    }

    #[test]
    fn test_bad_sides() {
        let negative = solve_right_triangle(&KnownValues::new().with_a(-3.0).with_b(4.0));
        assert!(matches!(negative, Err(MathError::Domain(_))));

        let nan = solve_right_triangle(&KnownValues::new().with_a(f64::NAN).with_b(4.0));
        assert!(matches!(nan, Err(MathError::Domain(_))));
    }

    #[test]
    fn test_inadmissible_selections() {
        let cases = [
            KnownValues::new(),
            KnownValues::new().with_a(3.0),
            KnownValues::new().with_angle_a(30.0).with_angle_b(60.0),
            KnownValues::new().with_a(3.0).with_b(4.0).with_c(5.0),
            KnownValues::new().with_a(3.0).with_angle_b(60.0),
        ];
        for known in cases {
            assert!(
                matches!(solve_right_triangle(&known), Err(MathError::Input(_))),
                "expected input error for {:?}",
                known
            );
        }
    }

    #[test]
    fn test_angle_b_is_ignored() {
        let with_b = KnownValues::new().with_a(3.0).with_b(4.0).with_angle_b(10.0);
        let t = solve_right_triangle(&with_b).unwrap();
        assert!(close(t.angle_b, 53.13, 0.01));
    }

    #[test]
    fn test_derived_quantities() {
        let t = solve_right_triangle(&KnownValues::new().with_a(3.0).with_b(4.0)).unwrap();
        assert_eq!(t.area(), 6.0);
        assert_eq!(t.perimeter(), 12.0);
        let ratios = t.ratios();
        assert_eq!(ratios.sin, 0.6);
        assert_eq!(ratios.cos, 0.8);
        assert_eq!(ratios.tan, 0.75);
    }

    #[test]
    fn test_special_triangles() {
        let t = SpecialTriangle::lookup("30-60-90").unwrap().scale(2.0).unwrap();
        assert_eq!(t.a, 2.0);
        assert!(close(t.b, 2.0 * 3f64.sqrt(), 1e-12));
        assert_eq!(t.c, 4.0);
        assert_eq!(t.angle_a, 30.0);
        assert_eq!(t.angle_b, 60.0);

        let iso = SpecialTriangle::lookup("45-45-90").unwrap().scale(1.0).unwrap();
        assert_eq!(iso.a, iso.b);
        assert_eq!(iso.angle_a, 45.0);

        assert!(SpecialTriangle::lookup("10-80-90").is_err());
        assert!(SPECIAL_TRIANGLES[0].scale(0.0).is_err());
    }

    #[test]
    fn test_sqrt_3_constant() {
        assert_eq!(SQRT_3, 3f64.sqrt());
    }

    #[test]
    fn test_extreme_magnitudes() {
        for scale in [1e200, 1e-200] {
            let t = solve_right_triangle(&KnownValues::new().with_a(3.0 * scale).with_b(4.0 * scale))
                .unwrap();
            assert!(close(t.c / scale, 5.0, 1e-12), "c = {} at scale {}", t.c, scale);

            let t = solve_right_triangle(&KnownValues::new().with_a(3.0 * scale).with_c(5.0 * scale))
                .unwrap();
            assert!(close(t.b / scale, 4.0, 1e-12), "b = {} at scale {}", t.b, scale);

            let t = solve_right_triangle(&KnownValues::new().with_b(4.0 * scale).with_c(5.0 * scale))
                .unwrap();
            assert!(close(t.a / scale, 3.0, 1e-12), "a = {} at scale {}", t.a, scale);
        }
    }

    #[test]
    fn test_unrepresentable_result() {
        let huge = KnownValues::new().with_a(1.5e308).with_b(1.5e308);
        assert!(matches!(solve_right_triangle(&huge), Err(MathError::Domain(_))));

        let tiny = KnownValues::new().with_c(1e-320).with_angle_a(1e-10);
        assert!(matches!(solve_right_triangle(&tiny), Err(MathError::Domain(_))));
    }

    #[test]
    fn test_short_leg_error_names_argument() {
        let err = SPECIAL_TRIANGLES[1].scale(-1.0).unwrap_err();
        assert!(err.to_string().contains("side short leg"), "{}", err);
    }

    #[test]
    fn test_render() {
        let t = solve_right_triangle(&KnownValues::new().with_a(3.0).with_b(4.0)).unwrap();
        assert_eq!(
            t.render(&DisplayContext::new()),
            "a = 3\nb = 4\nc = 5\nA = 36.8699°\nB = 53.1301°\narea = 6\nperimeter = 12\n\
             sin A = 0.6, cos A = 0.8, tan A = 0.75"
        );
        let coarse = t.render(&DisplayContext::with_precision(1));
        assert!(coarse.contains("A = 36.9°"));
    }
}
