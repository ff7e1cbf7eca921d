//! Chart renderer — converts a parsed Chart into an HTML grid.
//!
//! The grid allocates one narrow track for every column that carries bar
//! content and one wide track for every column that carries chords, in
//! column order with the bar track first. Full-width rows (headings,
//! sections, spacers) span all tracks.

mod constants;
mod events;
mod html_builder;
mod rows;

use serde::Deserialize;

use crate::model::*;
use constants::*;
use html_builder::{standalone_document, HtmlBuilder};
use rows::render_row;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Renderer configuration. Every field is optional when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// CSS track size for bar columns
    pub bar_track: String,
    /// CSS track size for chord columns
    pub chord_track: String,
    /// Wrap the grid in a complete HTML document with a default stylesheet
    pub standalone: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bar_track: DEFAULT_BAR_TRACK.to_string(),
            chord_track: DEFAULT_CHORD_TRACK.to_string(),
            standalone: false,
        }
    }
}

/// Render a parsed Chart into HTML.
///
/// Pass `None` to use the default options.
pub fn render_chart_to_html(chart: &Chart, options: Option<&RenderOptions>) -> String {
    let defaults = RenderOptions::default();
    let options = options.unwrap_or(&defaults);

    let mut html = HtmlBuilder::new(grid_template(chart.columns(), options));
    for row in chart.rows() {
        html.push(render_row(row, chart));
    }

    let grid = html.build();
    if options.standalone {
        standalone_document(&grid)
    } else {
        grid
    }
}

/// The `grid-template-columns` value: one track per bar column and one per
/// chord column, bar before chord within a column index.
pub fn grid_template(columns: &[Column], options: &RenderOptions) -> String {
    let mut tracks = Vec::new();
    for column in columns {
        if column.has_bar {
            tracks.push(options.bar_track.as_str());
        }
        if column.has_chord {
            tracks.push(options.chord_track.as_str());
        }
    }
    tracks.join(" ")
}
