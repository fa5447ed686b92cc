//! Typed PLT command lines.
//!
//! Each [`Command`] renders to exactly one line of the cut file through its
//! `Display` impl. Numbers are written with integer formatting only, so the
//! output never depends on locale, grouping, or float notation.

use std::fmt;

use plotmark_core::artwork::LayerRole;

use crate::transform::DevicePoint;

/// A marker parameter set in the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSetting {
    /// Distance between markers along the long axis
    XDistance,
    /// Distance between markers across the short axis
    YDistance,
    XSize,
    YSize,
    /// Number of markers along the long axis
    XCount,
}

impl MarkerSetting {
    /// Returns the variable name the plotter firmware expects
    pub fn key(self) -> &'static str {
        match self {
            MarkerSetting::XDistance => "MARKER_X_DIS",
            MarkerSetting::YDistance => "MARKER_Y_DIS",
            MarkerSetting::XSize => "MARKER_X_SIZE",
            MarkerSetting::YSize => "MARKER_Y_SIZE",
            MarkerSetting::XCount => "MARKER_X_N",
        }
    }
}

/// How a path's pen-up line is introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenUpStyle {
    /// `U,x,y,`
    Plain,
    /// `,U,x,y,`
    LeadingSeparator,
}

impl PenUpStyle {
    /// Returns the pen-up form used for paths of the given cut role.
    ///
    /// The registration role is never exported and maps to [`PenUpStyle::Plain`].
    pub fn for_role(role: LayerRole) -> Self {
        match role {
            LayerRole::DieCut => PenUpStyle::LeadingSeparator,
            LayerRole::KissCut | LayerRole::Registration => PenUpStyle::Plain,
        }
    }
}

/// One line of a PLT cut file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Escape sequence resetting the plotter
    Reset,
    /// `SET <key>=<value>.`
    Set { setting: MarkerSetting, value: i64 },
    /// Closes the marker definitions
    LoadMarkersEnd,
    End,
    /// Home and initialise; written twice after the header
    Initialize,
    /// Move to the first anchor of a path without cutting
    PenUp { at: DevicePoint, style: PenUpStyle },
    /// Cut through every anchor of a path, starting at the first
    PenDown(Vec<DevicePoint>),
    /// Switch to the die-cut tool
    ToolChange,
    EndOfFile,
}

impl Command {
    pub fn set(setting: MarkerSetting, value: impl Into<i64>) -> Self {
        Command::Set {
            setting,
            value: value.into(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Reset => f.write_str("\x1B;@:"),
            Command::Set { setting, value } => write!(f, "SET {}={value}.", setting.key()),
            Command::LoadMarkersEnd => f.write_str("LOAD_MARKERS.END."),
            Command::End => f.write_str("END."),
            Command::Initialize => f.write_str(";:HOA,ECN,U,"),
            Command::PenUp { at, style } => {
                if *style == PenUpStyle::LeadingSeparator {
                    f.write_str(",")?;
                }
                write!(f, "U,{at},")
            }
            Command::PenDown(points) => {
                f.write_str("D")?;
                for point in points {
                    write!(f, ",{point}")?;
                }
                f.write_str(",")
            }
            Command::ToolChange => f.write_str("P6,"),
            Command::EndOfFile => f.write_str("e@"),
        }
    }
}
