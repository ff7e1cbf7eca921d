//! Data model for a parsed chord chart.
//!
//! A chart is a strict tree: the Chart owns its rows, rows own their cells,
//! cells own their chord event. Columns are a derived aggregate over all
//! line rows and are recomputed whenever the rows change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns::analyze_columns;
use crate::error::ChartError;
use crate::parser::parse_rows;

/// A complete chord chart parsed from text.
///
/// Only serializable: columns are derived from rows, so a chart is always
/// built through `parse` or `set_rows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    /// Rows in input order (one per physical line)
    rows: Vec<Row>,
    /// Per-column bar/chord presence across all line rows
    columns: Vec<Column>,
    /// Total number of rendered tracks
    columns_count: usize,
}

/// One physical line of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Row {
    /// Blank input line
    Spacer,
    /// `## Title`; level is the number of `#` markers
    Heading { level: usize, title: String },
    /// `(A)`, a rehearsal-mark style label
    Section { title: String },
    /// Musical line, cells in left-to-right order
    Line { cells: Vec<Cell> },
}

/// One display slot within a musical line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Resolved bar-line glyph
    pub bar: Option<String>,
    /// Time signature
    pub sig: Option<TimeSignature>,
    /// Musical content of the slot
    pub chord: Option<ChordEvent>,
}

/// Time signature kept as the literal digit text from the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignature {
    /// Numerator (e.g., "3" in 3/4)
    pub beats: String,
    /// Denominator (e.g., "4" in 3/4)
    pub beat_type: String,
}

/// The musical content of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChordEvent {
    /// No chord here (`.`); renders as nothing
    Space,
    /// A chord symbol such as `Bb7#11/D`
    Chord {
        /// Note letter, case preserved
        note: char,
        /// Run of `b` / `#` characters directly after the note
        accidental: String,
        /// Everything after the accidental up to an optional `/`
        alteration: String,
        /// Bass note after `/`
        root: Option<String>,
    },
    /// `%`, `%%`, `%2`, ...
    Repeat {
        /// Number of consecutive repeat marks
        count: usize,
        /// Repeat span in measures (1 when omitted)
        measures: u32,
    },
    /// `r`, `r8`, `r4.`, ...
    Rest {
        /// Note-value denominator (4 when omitted)
        duration: u32,
        /// Text after the duration digits; each `.` is one augmentation dot
        dot: String,
    },
}

/// Derived per-column layout information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Some line has a bar line or time signature at this index
    pub has_bar: bool,
    /// Some line has a chord event at this index
    pub has_chord: bool,
}

impl Chart {
    /// Create a new empty chart.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            columns_count: 0,
        }
    }

    /// Parse chart text into a new chart.
    pub fn from_text(input: &str) -> Result<Self, ChartError> {
        let mut chart = Self::new();
        chart.parse(input)?;
        Ok(chart)
    }

    /// Replace the chart's contents with the result of parsing `input`.
    ///
    /// On error the chart is left exactly as it was before the call.
    pub fn parse(&mut self, input: &str) -> Result<(), ChartError> {
        let rows = parse_rows(input)?;
        self.set_rows(rows);
        log::debug!(
            "parsed chart: {} rows, {} columns, {} tracks",
            self.rows.len(),
            self.columns.len(),
            self.columns_count
        );
        Ok(())
    }

    /// Replace the rows and recompute the column layout.
    ///
    /// Empty cells are dropped from line rows; a line never holds a slot
    /// without a bar, signature or chord.
    pub fn set_rows(&mut self, mut rows: Vec<Row>) {
        for row in &mut rows {
            if let Row::Line { cells } = row {
                cells.retain(|cell| !cell.is_empty());
            }
        }
        self.rows = rows;
        self.calculate_columns();
    }

    /// Rescan all line rows and rebuild the column layout.
    pub fn calculate_columns(&mut self) {
        let (columns, columns_count) = analyze_columns(&self.rows);
        self.columns = columns;
        self.columns_count = columns_count;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of layout tracks a renderer must allocate.
    pub fn columns_count(&self) -> usize {
        self.columns_count
    }

    /// Iterate over the cells of every line row.
    pub fn lines(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().filter_map(Row::cells)
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    /// Cells of a line row; `None` for every other row kind.
    pub fn cells(&self) -> Option<&[Cell]> {
        match self {
            Row::Line { cells } => Some(cells.as_slice()),
            _ => None,
        }
    }
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.bar.is_none() && self.sig.is_none() && self.chord.is_none()
    }

    /// Whether this cell occupies the bar track of its column.
    pub fn has_bar_content(&self) -> bool {
        self.bar.is_some() || self.sig.is_some()
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.beats, self.beat_type)
    }
}

impl fmt::Display for ChordEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordEvent::Space => f.write_str("."),
            ChordEvent::Chord {
                note,
                accidental,
                alteration,
                root,
            } => {
                write!(f, "{note}{accidental}{alteration}")?;
                if let Some(root) = root {
                    write!(f, "/{root}")?;
                }
                Ok(())
            }
            ChordEvent::Repeat { count, measures } => {
                for _ in 0..*count {
                    f.write_str("%")?;
                }
                // measures == 1 is the implicit default
                if *measures != 1 {
                    write!(f, "{measures}")?;
                }
                Ok(())
            }
            ChordEvent::Rest { duration, dot } => write!(f, "r{duration}{dot}"),
        }
    }
}
