//! OPOS registration marker geometry.
//!
//! The plotter's camera locates printed registration marks before cutting.
//! It needs the distance between marks along both axes, the mark size, and
//! how many marks run along the long side of the job. Distances come from
//! the artwork bounds; the mark size is fixed.
//!
//! The long-axis distance is always the larger of width and height. The
//! plotter expects the long dimension along its feed axis; orienting the
//! artboard that way is left to the operator.

use std::{fmt, num::IntErrorKind};

use log::warn;
use serde::{Deserialize, Deserializer};

use plotmark_core::geometry::Bounds;

use crate::transform::round_half_up;

/// Marker width in device units (about 3 mm).
pub const MARKER_SIZE_X: i64 = 120;

/// Marker height in device units (about 3 mm).
pub const MARKER_SIZE_Y: i64 = 120;

/// Number of markers placed along the long axis, never fewer than two.
///
/// # Examples
///
/// ```
/// # use plotmark::markers::MarkerCount;
/// assert_eq!(MarkerCount::new(4).get(), 4);
/// assert_eq!(MarkerCount::new(1).get(), 2);
/// assert_eq!(MarkerCount::parse_lenient("3 per side").get(), 3);
/// assert_eq!(MarkerCount::parse_lenient("abc").get(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerCount(u32);

impl MarkerCount {
    /// The smallest count the plotter accepts: one marker at each end.
    pub const MIN: u32 = 2;

    /// Creates a count, raising anything below [`MarkerCount::MIN`] to the minimum.
    pub fn new(value: i64) -> Self {
        if value < i64::from(Self::MIN) {
            warn!(requested = value, used = Self::MIN; "Marker count below minimum, clamping");
            return Self(Self::MIN);
        }
        Self(u32::try_from(value).unwrap_or(u32::MAX))
    }

    /// Reads a count from free-form user input.
    ///
    /// Leading whitespace is skipped, then an optional sign and the leading
    /// run of ASCII digits are read; anything after them is ignored. Input
    /// without leading digits falls back to the default count.
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());

        match rest[..end].parse::<i64>() {
            Ok(value) => Self::new(if negative { -value } else { value }),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                Self::new(if negative { i64::MIN } else { i64::MAX })
            }
            Err(_) => {
                warn!(input; "Marker count is not a number, using default");
                Self::default()
            }
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for MarkerCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for MarkerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for MarkerCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Self::new(value),
            Raw::Text(text) => Self::parse_lenient(&text),
        })
    }
}

/// Marker layout written into the PLT header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpec {
    count: MarkerCount,
    size_x: i64,
    size_y: i64,
    distance_long: i64,
    distance_short: i64,
}

impl MarkerSpec {
    /// Markers along the long axis
    pub fn count(&self) -> MarkerCount {
        self.count
    }

    pub fn size_x(&self) -> i64 {
        self.size_x
    }

    pub fn size_y(&self) -> i64 {
        self.size_y
    }

    /// Distance between the outermost markers along the long axis, in device units
    pub fn distance_long(&self) -> i64 {
        self.distance_long
    }

    /// Distance between the marker rows across the short axis, in device units
    pub fn distance_short(&self) -> i64 {
        self.distance_short
    }
}

/// Derives marker distances from the artwork bounds.
///
/// Zero-sized bounds produce zero distances.
pub fn compute_markers(bounds: Bounds, count: MarkerCount, scale: f64) -> MarkerSpec {
    MarkerSpec {
        count,
        size_x: MARKER_SIZE_X,
        size_y: MARKER_SIZE_Y,
        distance_long: round_half_up(bounds.long_side() * scale),
        distance_short: round_half_up(bounds.short_side() * scale),
    }
}
