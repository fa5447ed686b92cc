//! Geometric primitives in source drawing space.
//!
//! This module provides the fundamental geometric types used to describe
//! artwork before it is converted into plotter device units.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in drawing space
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Drawing space follows the publishing convention used by vector editors:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Bottom-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward
//! - **Unit**: Points (1/72 inch), fractional values allowed
//!
//! The plotter uses the opposite vertical direction; that conversion lives
//! in the transform stage of the pipeline, not here.

use serde::Deserialize;

/// A 2D point representing a position in drawing coordinate space.
///
/// Points use `f64` coordinates so that sub-point positions survive the
/// conversion to device units without accumulating error.
///
/// # Examples
///
/// ```
/// # use plotmark_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let diff = p1.sub_point(p2);
/// assert_eq!(diff.x(), 5.0);
/// assert_eq!(diff.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plotmark_core::geometry::Point;
    /// let point = Point::new(10.0, 20.0);
    ///
    /// let doubled = point.scale(2.0);
    /// assert_eq!(doubled.x(), 20.0);
    /// assert_eq!(doubled.y(), 40.0);
    /// ```
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates.
///
/// The default value is the zero-sized box at the origin, which is also what
/// an empty point set collapses to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates the zero-sized bounds containing exactly one point
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Computes the smallest bounds containing every point.
    ///
    /// Returns `None` when the iterator yields no points, so callers decide
    /// how an empty set should collapse instead of seeing infinite sentinels.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plotmark_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_points([Point::new(0.0, 10.0), Point::new(40.0, -5.0)])
    ///     .expect("two points");
    /// assert_eq!(bounds.width(), 40.0);
    /// assert_eq!(bounds.height(), 15.0);
    ///
    /// assert!(Bounds::from_points(std::iter::empty()).is_none());
    /// ```
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), Self::include_point))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the larger of width and height
    pub fn long_side(self) -> f64 {
        self.width().max(self.height())
    }

    /// Returns the smaller of width and height
    pub fn short_side(self) -> f64 {
        self.width().min(self.height())
    }

    /// Grows the bounds so that they contain `point`.
    pub fn include_point(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plotmark_core::geometry::{Bounds, Point};
    /// let a = Bounds::from_point(Point::new(0.0, 0.0));
    /// let b = Bounds::from_point(Point::new(30.0, 20.0));
    ///
    /// let combined = a.merge(&b);
    /// assert_eq!(combined.width(), 30.0);
    /// assert_eq!(combined.height(), 20.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-5000.0f64..5000.0, -5000.0f64..5000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec(point_strategy(), 1..32)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Bounds built from a point set should contain every point of the set.
    fn check_bounds_contain_all_points(points: Vec<Point>) -> Result<(), TestCaseError> {
        let bounds = Bounds::from_points(points.iter().copied()).unwrap();

        for p in &points {
            prop_assert!(bounds.min_x() <= p.x() && p.x() <= bounds.max_x());
            prop_assert!(bounds.min_y() <= p.y() && p.y() <= bounds.max_y());
        }
        prop_assert!(bounds.width() >= 0.0);
        prop_assert!(bounds.height() >= 0.0);
        Ok(())
    }

    /// Bounds of a concatenated set equal the merge of the bounds of its halves.
    fn check_merge_matches_union(a: Vec<Point>, b: Vec<Point>) -> Result<(), TestCaseError> {
        let ba = Bounds::from_points(a.iter().copied()).unwrap();
        let bb = Bounds::from_points(b.iter().copied()).unwrap();
        let union = Bounds::from_points(a.iter().chain(b.iter()).copied()).unwrap();
        let merged = ba.merge(&bb);

        prop_assert!(approx_eq!(f64, merged.min_x(), union.min_x()));
        prop_assert!(approx_eq!(f64, merged.min_y(), union.min_y()));
        prop_assert!(approx_eq!(f64, merged.max_x(), union.max_x()));
        prop_assert!(approx_eq!(f64, merged.max_y(), union.max_y()));
        Ok(())
    }

    /// The long side is never shorter than the short side.
    fn check_long_side_dominates(points: Vec<Point>) -> Result<(), TestCaseError> {
        let bounds = Bounds::from_points(points).unwrap();
        prop_assert!(bounds.long_side() >= bounds.short_side());
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn bounds_contain_all_points(points in points_strategy()) {
            check_bounds_contain_all_points(points)?;
        }

        #[test]
        fn merge_matches_union(a in points_strategy(), b in points_strategy()) {
            check_merge_matches_union(a, b)?;
        }

        #[test]
        fn long_side_dominates(points in points_strategy()) {
            check_long_side_dominates(points)?;
        }
    }
}
