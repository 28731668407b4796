//! Unit-circle trigonometry

use serde::Serialize;

use crate::context::{DisplayContext, Render};
use crate::error::{MathError, Result};

/// Values closer than this to zero are reported as exactly zero.
pub const SNAP_EPSILON: f64 = 1e-12;

/// Convert degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Where a normalized angle falls on the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// On the positive or negative x or y axis (0°, 90°, 180°, 270°)
    Axis,
    /// Strictly inside quadrant I..IV
    Quadrant(u8),
}

/// Trigonometric values of a single angle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrigValues {
    /// Angle as supplied, in degrees
    pub degrees: f64,
    /// Angle normalized into [0, 360)
    pub normalized: f64,
    /// Angle in radians
    pub radians: f64,
    /// Quadrant or axis of the normalized angle
    pub position: Position,
    /// sin θ
    pub sin: f64,
    /// cos θ
    pub cos: f64,
    /// tan θ, `None` where cos θ = 0
    pub tan: Option<f64>,
}

impl Render for TrigValues {
    fn render(&self, ctx: &DisplayContext) -> String {
        let position = match self.position {
            Position::Axis => "on an axis".to_string(),
            Position::Quadrant(q) => format!("quadrant {}", q),
        };
        let tan = self
            .tan
            .map_or_else(|| "undefined".to_string(), |t| ctx.format_number(t));
        [
            format!(
                "θ = {} = {} rad ({})",
                ctx.format_degrees(self.degrees),
                ctx.format_number(self.radians),
                position
            ),
            format!("sin θ = {}", ctx.format_number(self.sin)),
            format!("cos θ = {}", ctx.format_number(self.cos)),
            format!("tan θ = {}", tan),
        ]
        .join("\n")
    }
}

/// Evaluate sin, cos and tan of an angle given in degrees.
///
/// # Errors
///
/// Returns `Domain` if the angle is NaN or infinite.
pub fn evaluate_angle(degrees: f64) -> Result<TrigValues> {
    if !degrees.is_finite() {
        return Err(MathError::domain(format!(
            "angle must be a finite number of degrees (got {})",
            degrees
        )));
    }

    // rem_euclid rounds tiny negative angles up to exactly 360
    let normalized = match degrees.rem_euclid(360.0) {
        n if n >= 360.0 => 0.0,
        n => n,
    };
    let radians = to_radians(degrees);
    let position = position_of(normalized);

    // Exact axis angles get exact values; sin(π) is not 0 in floating point.
    let (sin, cos) = match normalized {
        n if n == 0.0 => (0.0, 1.0),
        n if n == 90.0 => (1.0, 0.0),
        n if n == 180.0 => (0.0, -1.0),
        n if n == 270.0 => (-1.0, 0.0),
        _ => (snap(radians.sin()), snap(radians.cos())),
    };

    let tan = if cos == 0.0 { None } else { Some(snap(sin / cos)) };

    Ok(TrigValues {
        degrees,
        normalized,
        radians,
        position,
        sin,
        cos,
        tan,
    })
}

fn position_of(normalized: f64) -> Position {
    match normalized {
        n if n == 0.0 || n == 90.0 || n == 180.0 || n == 270.0 => Position::Axis,
        n if n < 90.0 => Position::Quadrant(1),
        n if n < 180.0 => Position::Quadrant(2),
        n if n < 270.0 => Position::Quadrant(3),
        _ => Position::Quadrant(4),
    }
}

/// Snap values within [`SNAP_EPSILON`] of zero to zero.
fn snap(value: f64) -> f64 {
    if value.abs() < SNAP_EPSILON {
        0.0
    } else {
        value
    }
}
