//! Assembly of the complete cut file.

use std::{fmt, io::Write};

use log::debug;

use super::command::{Command, MarkerSetting};
use crate::{export, markers::MarkerSpec};

/// A finished cut file: an ordered list of command lines.
///
/// The document is built once by [`assemble`] and never modified. Each line
/// is terminated by `\n` when written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PltDocument {
    lines: Vec<String>,
}

impl PltDocument {
    /// Returns the rendered lines, without terminators
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes every line followed by `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Io`] if the writer fails. Whatever was already
    /// written is left as is; callers should discard it.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), export::Error> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn push(&mut self, command: &Command) {
        self.lines.push(command.to_string());
    }
}

impl fmt::Display for PltDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Orders header, marker block, path blocks and trailer into one document.
///
/// The tool change before the die-cut block is written only when that block
/// contains at least one command.
pub fn assemble(markers: &MarkerSpec, kiss_cut: &[Command], die_cut: &[Command]) -> PltDocument {
    let mut doc = PltDocument::default();

    doc.push(&Command::Reset);
    for command in [
        Command::set(MarkerSetting::XDistance, markers.distance_long()),
        Command::set(MarkerSetting::YDistance, markers.distance_short()),
        Command::set(MarkerSetting::XSize, markers.size_x()),
        Command::set(MarkerSetting::YSize, markers.size_y()),
        Command::set(MarkerSetting::XCount, markers.count().get()),
        Command::LoadMarkersEnd,
        Command::End,
        Command::Initialize,
        Command::Initialize,
    ] {
        doc.push(&command);
    }

    kiss_cut.iter().for_each(|command| doc.push(command));

    if !die_cut.is_empty() {
        doc.push(&Command::ToolChange);
        die_cut.iter().for_each(|command| doc.push(command));
    }

    doc.push(&Command::EndOfFile);

    debug!(
        lines = doc.len(),
        kiss_cut_paths = kiss_cut.len() / 2,
        die_cut_paths = die_cut.len() / 2;
        "PLT document assembled"
    );
    doc
}

#[cfg(test)]
mod tests {
    use plotmark_core::geometry::{Bounds, Point};

    use super::*;
    use crate::{
        export::plt::PenUpStyle,
        markers::{MarkerCount, compute_markers},
        transform::{DevicePoint, POINTS_TO_DEVICE},
    };

    const HEADER_LINES: usize = 10;

    fn markers() -> MarkerSpec {
        let bounds = Bounds::from_points([Point::new(0.0, 0.0), Point::new(100.0, 50.0)]).unwrap();
        compute_markers(bounds, MarkerCount::default(), POINTS_TO_DEVICE)
    }

    fn pair(style: PenUpStyle, x: i64, y: i64) -> Vec<Command> {
        let at = DevicePoint::new(x, y);
        vec![Command::PenUp { at, style }, Command::PenDown(vec![at, at])]
    }

    #[test]
    fn test_header_and_trailer() {
        let doc = assemble(&markers(), &[], &[]);

        assert_eq!(
            doc.lines(),
            [
                "\u{1b};@:",
                "SET MARKER_X_DIS=1411.",
                "SET MARKER_Y_DIS=706.",
                "SET MARKER_X_SIZE=120.",
                "SET MARKER_Y_SIZE=120.",
                "SET MARKER_X_N=2.",
                "LOAD_MARKERS.END.",
                "END.",
                ";:HOA,ECN,U,",
                ";:HOA,ECN,U,",
                "e@",
            ]
        );
    }

    #[test]
    fn test_no_tool_change_without_die_cut() {
        let kiss = pair(PenUpStyle::Plain, 1, 2);
        let doc = assemble(&markers(), &kiss, &[]);

        assert!(!doc.lines().iter().any(|line| line == "P6,"));
        assert_eq!(doc.lines()[HEADER_LINES], "U,1,2,");
        assert_eq!(doc.lines().last().map(String::as_str), Some("e@"));
    }

    #[test]
    fn test_tool_change_precedes_die_cut_block() {
        let kiss = pair(PenUpStyle::Plain, 1, 2);
        let die = pair(PenUpStyle::LeadingSeparator, 3, 4);
        let doc = assemble(&markers(), &kiss, &die);

        let tool_changes: Vec<_> = doc
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| *line == "P6,")
            .collect();
        assert_eq!(tool_changes.len(), 1);

        let (index, _) = tool_changes[0];
        assert_eq!(index, HEADER_LINES + kiss.len());
        assert_eq!(doc.lines()[index + 1], ",U,3,4,");
        assert_eq!(doc.lines()[index + 2], "D,3,4,3,4,");
        assert_eq!(doc.lines()[index + 3], "e@");
    }

    #[test]
    fn test_die_cut_only() {
        let die = pair(PenUpStyle::LeadingSeparator, 5, 6);
        let doc = assemble(&markers(), &[], &die);

        assert_eq!(doc.lines()[HEADER_LINES], "P6,");
        assert_eq!(doc.len(), HEADER_LINES + 1 + die.len() + 1);
    }

    #[test]
    fn test_display_terminates_every_line() {
        let doc = assemble(&markers(), &[], &[]);
        let text = doc.to_string();

        assert!(text.starts_with("\u{1b};@:\nSET MARKER_X_DIS=1411.\n"));
        assert!(text.ends_with(";:HOA,ECN,U,\ne@\n"));
        assert_eq!(text.lines().count(), doc.len());
    }

    #[test]
    fn test_write_to_matches_display() {
        let kiss = pair(PenUpStyle::Plain, 10, 20);
        let doc = assemble(&markers(), &kiss, &[]);

        let mut buffer = Vec::new();
        doc.write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), doc.to_string());
    }
}
