//! Chart text parser — classifies physical lines into rows and splits
//! musical lines into cells.

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ChartError;
use crate::event::parse_event;
use crate::glyphs;
use crate::model::*;

static RE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s+(.*)$").unwrap());
static RE_SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\((.*)\)$").unwrap());
static RE_SIGNATURE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)/(\d+)$").unwrap());

/// Parse chart text into a fully built Chart.
pub fn parse_chart(input: &str) -> Result<Chart, ChartError> {
    Chart::from_text(input)
}

/// Parse chart text into rows, one per physical line.
///
/// The whole blob is trimmed first, so leading and trailing blank lines
/// never produce spacers. Line numbers in errors still count from the
/// first physical line. Any unparseable token aborts the parse.
pub fn parse_rows(input: &str) -> Result<Vec<Row>, ChartError> {
    let body = input.trim_start();
    let skipped = input[..input.len() - body.len()].matches('\n').count();

    body.trim_end()
        .split('\n')
        .enumerate()
        .map(|(idx, text)| parse_row(text.trim(), skipped + idx + 1))
        .collect()
}

// ─── Row classification ──────────────────────────────────────────────

fn parse_row(text: &str, line: usize) -> Result<Row, ChartError> {
    if text.is_empty() {
        return Ok(Row::Spacer);
    }

    if let Some(row) = classify_row(text) {
        debug!("line {line}: {row:?}");
        return Ok(row);
    }

    let cells = tokenize_line(text, line)?;
    debug!("line {line}: {} cells", cells.len());
    Ok(Row::Line { cells })
}

/// Classify a non-empty line as a heading or section. `None` means the
/// line is musical and goes to the tokenizer.
pub fn classify_row(text: &str) -> Option<Row> {
    if let Some(caps) = RE_HEADING.captures(text) {
        return Some(Row::Heading {
            level: caps[1].len(),
            title: caps[2].to_string(),
        });
    }

    RE_SECTION.captures(text).map(|caps| Row::Section {
        title: caps[1].to_string(),
    })
}

// ─── Line tokenizer ──────────────────────────────────────────────────

/// Split a musical line into cells.
///
/// Tokens are appended to a current cell; a token that conflicts with what
/// the cell already holds emits the cell and starts a new one. A bar line
/// conflicts with anything, a signature with a signature or chord (so a bar
/// and the signature after it share a slot), a chord only with a chord.
/// The last cell is always emitted.
pub fn tokenize_line(text: &str, line: usize) -> Result<Vec<Cell>, ChartError> {
    let mut cells = Vec::new();
    let mut cell = Cell::default();

    for token in text.split_whitespace() {
        if let Some(bar) = glyphs::barline(token) {
            if !cell.is_empty() {
                cells.push(std::mem::take(&mut cell));
            }
            cell.bar = Some(bar.to_string());
            continue;
        }

        if let Some(caps) = RE_SIGNATURE.captures(token) {
            if cell.sig.is_some() || cell.chord.is_some() {
                cells.push(std::mem::take(&mut cell));
            }
            cell.sig = Some(TimeSignature {
                beats: caps[1].to_string(),
                beat_type: caps[2].to_string(),
            });
            continue;
        }

        let event = parse_event(token).map_err(|e| {
            warn!("line {line}: {e}");
            ChartError::UnparseableToken { token: e.0, line }
        })?;
        if cell.chord.is_some() {
            cells.push(std::mem::take(&mut cell));
        }
        cell.chord = Some(event);
    }

    cells.push(cell);
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::{BARLINE_DOUBLE, BARLINE_SINGLE, REPEAT_OPEN};
    use pretty_assertions::assert_eq;

    fn chord_cell(token: &str) -> Cell {
        Cell {
            chord: Some(parse_event(token).unwrap()),
            ..Cell::default()
        }
    }

    fn bar_cell(glyph: &str) -> Cell {
        Cell {
            bar: Some(glyph.to_string()),
            ..Cell::default()
        }
    }

    fn sig(beats: &str, beat_type: &str) -> Option<TimeSignature> {
        Some(TimeSignature {
            beats: beats.into(),
            beat_type: beat_type.into(),
        })
    }

    #[test]
    fn headings() {
        assert_eq!(
            classify_row("# Autumn Leaves"),
            Some(Row::Heading { level: 1, title: "Autumn Leaves".into() })
        );
        assert_eq!(
            classify_row("###   Bridge notes"),
            Some(Row::Heading { level: 3, title: "Bridge notes".into() })
        );
        // markers without whitespace are not a heading
        assert_eq!(classify_row("#C"), None);
    }

    #[test]
    fn sections() {
        assert_eq!(
            classify_row("(A)"),
            Some(Row::Section { title: "A".into() })
        );
        assert_eq!(
            classify_row("(Verse 2)"),
            Some(Row::Section { title: "Verse 2".into() })
        );
        assert_eq!(classify_row("(A) C"), None);
        assert_eq!(classify_row("C D"), None);
    }

    #[test]
    fn chord_after_bar_shares_its_cell() {
        let cells = tokenize_line("C Dm7 | G7/B", 1).unwrap();
        assert_eq!(
            cells,
            vec![
                chord_cell("C"),
                chord_cell("Dm7"),
                Cell {
                    bar: Some(BARLINE_SINGLE.into()),
                    ..chord_cell("G7/B")
                },
            ]
        );
    }

    #[test]
    fn bar_signature_and_chord_share_a_cell() {
        let cells = tokenize_line("| 3/4 C", 1).unwrap();
        assert_eq!(
            cells,
            vec![Cell {
                bar: Some(BARLINE_SINGLE.into()),
                sig: sig("3", "4"),
                ..chord_cell("C")
            }]
        );
    }

    #[test]
    fn signature_then_bar_are_split() {
        let cells = tokenize_line("4/4 | C", 1).unwrap();
        assert_eq!(
            cells,
            vec![
                Cell { sig: sig("4", "4"), ..Cell::default() },
                Cell {
                    bar: Some(BARLINE_SINGLE.into()),
                    ..chord_cell("C")
                },
            ]
        );
    }

    #[test]
    fn consecutive_bars_and_signatures_split() {
        let cells = tokenize_line("|| [ 4/4 12/8", 1).unwrap();
        assert_eq!(
            cells,
            vec![
                bar_cell(BARLINE_DOUBLE),
                Cell {
                    bar: Some(REPEAT_OPEN.into()),
                    sig: sig("4", "4"),
                    chord: None,
                },
                Cell { sig: sig("12", "8"), ..Cell::default() },
            ]
        );
    }

    #[test]
    fn chords_split_on_every_chord() {
        let cells = tokenize_line("| C D", 1).unwrap();
        assert_eq!(
            cells,
            vec![
                Cell {
                    bar: Some(BARLINE_SINGLE.into()),
                    ..chord_cell("C")
                },
                chord_cell("D"),
            ]
        );
    }

    #[test]
    fn trailing_bar_is_flushed() {
        let cells = tokenize_line("C |", 1).unwrap();
        assert_eq!(cells, vec![chord_cell("C"), bar_cell(BARLINE_SINGLE)]);
    }

    #[test]
    fn whitespace_runs_separate_tokens() {
        let cells = tokenize_line("C \t  D", 1).unwrap();
        assert_eq!(cells, vec![chord_cell("C"), chord_cell("D")]);
    }

    #[test]
    fn emitted_cells_are_never_empty() {
        let cells = tokenize_line("| 4/4 C . r8 % | ;; ||. D ]] [[", 1).unwrap();
        assert!(cells.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn unparseable_token_reports_line() {
        let err = parse_rows("C D\n\nE 1m F").unwrap_err();
        match err {
            ChartError::UnparseableToken { token, line } => {
                assert_eq!(token, "1m");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn error_line_counts_leading_blank_lines() {
        let err = parse_rows("\n\n# T\nC 1m").unwrap_err();
        match err {
            ChartError::UnparseableToken { token, line } => {
                assert_eq!(token, "1m");
                assert_eq!(line, 4);
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_rows("  \r\n\t\n%x").unwrap_err();
        assert!(matches!(err, ChartError::UnparseableToken { line: 3, .. }));
    }

    #[test]
    fn rows_keep_input_order() {
        let rows = parse_rows("\n  # Title\n(A)\n\nC | D\n  ").unwrap();
        assert_eq!(rows.len(), 4);
        assert!(matches!(rows[0], Row::Heading { level: 1, .. }));
        assert!(matches!(rows[1], Row::Section { .. }));
        assert_eq!(rows[2], Row::Spacer);
        assert!(matches!(rows[3], Row::Line { .. }));
    }

    #[test]
    fn crlf_line_endings() {
        let rows = parse_rows("C D\r\n\r\n(B)\r\n").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], Row::Spacer);
        assert_eq!(rows[2], Row::Section { title: "B".into() });
    }

    #[test]
    fn empty_input_is_a_single_spacer() {
        assert_eq!(parse_rows("").unwrap(), vec![Row::Spacer]);
        assert_eq!(parse_rows(" \n \n").unwrap(), vec![Row::Spacer]);
    }
}
