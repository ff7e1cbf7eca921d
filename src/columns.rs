//! Column analysis — decides, for the whole chart, which cell indices need
//! a bar track and which need a chord track.
//!
//! Column membership is a property of all lines at once, so it is always
//! recomputed from scratch.

use crate::model::{Column, Row};

/// Scan every line row and return the column layout plus the total number
/// of rendered tracks.
///
/// Only line rows participate. Lines shorter than the longest line simply
/// contribute nothing to the columns past their end.
pub fn analyze_columns(rows: &[Row]) -> (Vec<Column>, usize) {
    let lines: Vec<_> = rows.iter().filter_map(Row::cells).collect();
    let max_line = lines.iter().map(|cells| cells.len()).max().unwrap_or(0);

    let columns: Vec<Column> = (0..max_line)
        .map(|index| {
            let mut column = Column::default();
            for cell in lines.iter().filter_map(|cells| cells.get(index)) {
                column.has_bar |= cell.has_bar_content();
                column.has_chord |= cell.chord.is_some();
            }
            column
        })
        .collect();

    let columns_count = columns.iter().map(Column::track_count).sum();
    (columns, columns_count)
}

impl Column {
    /// Tracks this column occupies: one for bars, one for chords.
    pub fn track_count(&self) -> usize {
        usize::from(self.has_bar) + usize::from(self.has_chord)
    }
}
