//! Row rendering: spacers, headings, sections and musical lines.

use crate::model::*;
use super::events::{render_bar, render_chord};
use super::html_builder::{element, escape, span, span_all};

pub(super) fn render_row(row: &Row, chart: &Chart) -> String {
    match row {
        Row::Spacer => element("spacer", None, Some(&span_all(chart.columns_count())), ""),
        Row::Heading { level, title } => element(
            &format!("heading{level}"),
            None,
            Some(&span_all(chart.columns_count())),
            &span(None, &escape(title)),
        ),
        Row::Section { title } => element(
            "section",
            None,
            Some(&span_all(chart.columns_count())),
            &span(Some("title"), &escape(title)),
        ),
        Row::Line { cells } => render_line(cells, chart.columns()),
    }
}

/// One grid item per track. Lines shorter than the chart are padded with
/// empty items so the next row starts on a fresh grid line.
fn render_line(cells: &[Cell], columns: &[Column]) -> String {
    let mut html = String::new();
    for (index, column) in columns.iter().enumerate() {
        let cell = cells.get(index);
        if column.has_bar {
            html.push_str(&render_bar(cell));
        }
        if column.has_chord {
            html.push_str(&render_chord(cell));
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(text: &str) -> Chart {
        Chart::from_text(text).unwrap()
    }

    #[test]
    fn full_width_rows_span_all_tracks() {
        let c = chart("# Blue Bossa\n(A)\n\n| C D |");
        let rows: Vec<String> = c.rows().iter().map(|r| render_row(r, &c)).collect();
        assert_eq!(
            rows[0],
            r#"<heading1 style="grid-column: span 4"><span>Blue Bossa</span></heading1>"#
        );
        assert_eq!(
            rows[1],
            r#"<section style="grid-column: span 4"><span class="title">A</span></section>"#
        );
        assert_eq!(rows[2], r#"<spacer style="grid-column: span 4"></spacer>"#);
    }

    #[test]
    fn line_emits_one_item_per_track() {
        let c = chart("| C D |\nE");
        // columns: (bar, chord), (chord), (bar)
        assert_eq!(c.columns_count(), 4);
        for row in c.rows() {
            let html = render_row(row, &c);
            let items = html.matches("<bar>").count()
                + html.matches("<chord").count()
                + html.matches("<nop>").count();
            assert_eq!(items, 4, "row {row:?} rendered as {html}");
        }
    }

    #[test]
    fn heading_title_is_escaped() {
        let c = chart("## Tom & Jerry");
        assert!(render_row(&c.rows()[0], &c).contains("Tom &amp; Jerry"));
    }
}
