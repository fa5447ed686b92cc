//! PLT cut file generation.
//!
//! A cut file is a header describing the OPOS registration markers,
//! followed by one pen-up/pen-down command pair per path, kiss-cut paths
//! first and die-cut paths second, and a fixed trailer:
//!
//! ```text
//! \x1B;@:
//! SET MARKER_X_DIS=1411.
//! SET MARKER_Y_DIS=706.
//! SET MARKER_X_SIZE=120.
//! SET MARKER_Y_SIZE=120.
//! SET MARKER_X_N=2.
//! LOAD_MARKERS.END.
//! END.
//! ;:HOA,ECN,U,
//! ;:HOA,ECN,U,
//! U,0,11289,
//! D,0,11289,1411,10583,
//! P6,
//! ,U,...
//! D,...
//! e@
//! ```
//!
//! The two cut roles are told apart by the pen-up line: kiss-cut paths use
//! `U,` while die-cut paths carry a leading separator, `,U,`. The `P6,`
//! tool change is written only when the die-cut block has at least one path.

mod command;
mod document;
mod layer;

pub use command::{Command, MarkerSetting, PenUpStyle};
pub use document::{PltDocument, assemble};
pub use layer::serialize_layer;
