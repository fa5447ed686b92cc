//! Conversion from drawing units to plotter device units.
//!
//! Drawing space is measured in points with Y pointing up; the plotter works
//! in integer device units of 1/1016 inch with Y pointing down from the top
//! edge of the artboard.
//!
//! ```text
//!   drawing                      device
//!    +Y                         (0,0) ───► +X
//!     ▲                           │
//!     │                           │
//!   (0,0) ───► +X                 ▼ +Y
//! ```
//!
//! Every coordinate is rounded independently with [`round_half_up`].

use std::fmt;

use plotmark_core::geometry::Point;

/// Device units per drawing point: 1016 units per inch over 72 points per inch.
pub const POINTS_TO_DEVICE: f64 = 1016.0 / 72.0;

/// A point in integer plotter device units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DevicePoint {
    x: i64,
    y: i64,
}

impl DevicePoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> i64 {
        self.x
    }

    pub fn y(self) -> i64 {
        self.y
    }
}

impl fmt::Display for DevicePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Rounds to the nearest integer, resolving exact halves toward positive infinity.
///
/// `2.5` becomes `3` and `-2.5` becomes `-2`. Non-finite input yields `0`
/// so that no `NaN` or infinity ever reaches the output file.
///
/// # Examples
///
/// ```
/// # use plotmark::transform::round_half_up;
/// assert_eq!(round_half_up(1411.11), 1411);
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// assert_eq!(round_half_up(f64::NAN), 0);
/// ```
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i64
}

/// Maps `point` into device space relative to `origin`.
///
/// X grows in the same direction in both spaces; Y is inverted, so a point
/// above the origin gets a negative device Y and a point below it a
/// positive one.
pub fn to_device(point: Point, origin: Point, scale: f64) -> DevicePoint {
    let offset = point.sub_point(origin).scale(scale);
    DevicePoint {
        x: round_half_up(offset.x()),
        y: round_half_up(-offset.y()),
    }
}

/// The fixed frame used for one conversion run.
///
/// The scale is always [`POINTS_TO_DEVICE`]; only the origin varies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformContext {
    origin: Point,
    scale: f64,
}

impl TransformContext {
    /// Creates a context anchored at `origin` (in drawing units)
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            scale: POINTS_TO_DEVICE,
        }
    }

    /// Anchors device space at the top-left corner of the artboard.
    ///
    /// X is pinned to the artboard's left edge (`0`) rather than to the ink
    /// bounds, so exports of slightly different artwork on the same artboard
    /// land on the same physical origin.
    pub fn for_artboard(artboard_top: f64) -> Self {
        Self::new(Point::new(0.0, artboard_top))
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a drawing point into device space
    pub fn to_device(&self, point: Point) -> DevicePoint {
        to_device(point, self.origin, self.scale)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn coord_strategy() -> impl Strategy<Value = f64> {
        -20_000.0f64..20_000.0
    }

    /// The origin itself always lands on device (0, 0).
    fn check_origin_is_zero(ox: f64, oy: f64) -> Result<(), TestCaseError> {
        let origin = Point::new(ox, oy);
        prop_assert_eq!(
            to_device(origin, origin, POINTS_TO_DEVICE),
            DevicePoint::new(0, 0)
        );
        Ok(())
    }

    /// A point higher in the drawing gets a smaller device Y.
    fn check_y_is_inverted(x: f64, y: f64, delta: f64, top: f64) -> Result<(), TestCaseError> {
        let ctx = TransformContext::for_artboard(top);
        let upper = ctx.to_device(Point::new(x, y + delta));
        let lower = ctx.to_device(Point::new(x, y));

        prop_assert!(upper.y() < lower.y());
        prop_assert_eq!(upper.x(), lower.x());
        Ok(())
    }

    /// Rounding never moves a value by more than half a unit.
    fn check_rounding_error_bounded(value: f64) -> Result<(), TestCaseError> {
        let rounded = round_half_up(value) as f64;
        prop_assert!((rounded - value).abs() <= 0.5);
        Ok(())
    }

    proptest! {
        #[test]
        fn origin_is_zero(ox in coord_strategy(), oy in coord_strategy()) {
            check_origin_is_zero(ox, oy)?;
        }

        #[test]
        fn y_is_inverted(
            x in coord_strategy(),
            y in coord_strategy(),
            delta in 1.0f64..1000.0,
            top in coord_strategy(),
        ) {
            check_y_is_inverted(x, y, delta, top)?;
        }

        #[test]
        fn rounding_error_bounded(value in -1.0e9f64..1.0e9) {
            check_rounding_error_bounded(value)?;
        }
    }
}
