//! Cell rendering: bar/signature slots and chord events.

use crate::glyphs;
use crate::model::*;
use super::html_builder::{div, element, escape, nop, span};

// ═══════════════════════════════════════════════════════════════════════
// Bar track
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_bar(cell: Option<&Cell>) -> String {
    let cell = match cell {
        Some(c) if c.has_bar_content() => c,
        _ => return nop(),
    };

    let mut inner = String::new();
    if let Some(ref bar) = cell.bar {
        inner.push_str(&div("line", &escape(bar)));
    }
    if let Some(ref sig) = cell.sig {
        inner.push_str(&div("hi", &escape(&sig.beats)));
        inner.push_str(&div("lo", &escape(&sig.beat_type)));
    }
    element("bar", None, None, &inner)
}

// ═══════════════════════════════════════════════════════════════════════
// Chord track
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_chord(cell: Option<&Cell>) -> String {
    match cell.and_then(|c| c.chord.as_ref()) {
        Some(event) => render_event(event),
        None => nop(),
    }
}

pub(super) fn render_event(event: &ChordEvent) -> String {
    match event {
        ChordEvent::Space => nop(),
        ChordEvent::Chord {
            note,
            accidental,
            alteration,
            root,
        } => render_chord_symbol(*note, accidental, alteration, root.as_deref()),
        ChordEvent::Repeat { count, measures } => {
            // Spans beyond the glyph choice are not drawn.
            element("chord", Some("repeat"), None, glyphs::repeat(*count, *measures))
        }
        ChordEvent::Rest { duration, dot } => render_rest(*duration, dot),
    }
}

fn render_chord_symbol(note: char, accidental: &str, alteration: &str, root: Option<&str>) -> String {
    let mut inner = div("note", &escape(&note.to_string()));

    if !accidental.is_empty() {
        let glyph = match glyphs::accidental(accidental) {
            Some(g) => g.to_string(),
            None => render_accidentals(accidental),
        };
        inner.push_str(&div("accidental", &glyph));
    }

    if !alteration.is_empty() {
        inner.push_str(&div("alteration", &render_accidentals(alteration)));
    }

    let class = match root {
        Some(root) => {
            let mut bass = glyphs::CHORD_SLASH.to_string();
            bass.push_str(&render_accidentals(root));
            inner.push_str(&div("root", &bass));
            Some("with-root")
        }
        None => None,
    };

    element("chord", class, None, &inner)
}

/// Free text with every `b` / `#` replaced by a compact accidental glyph.
pub(super) fn render_accidentals(text: &str) -> String {
    let mut html = String::new();
    let mut run = String::new();
    for ch in text.chars() {
        let glyph = match ch {
            'b' => glyphs::FLAT,
            '#' => glyphs::SHARP,
            _ => {
                run.push(ch);
                continue;
            }
        };
        if !run.is_empty() {
            html.push_str(&escape(&run));
            run.clear();
        }
        html.push_str(&span(Some("tilt"), glyph));
    }
    if !run.is_empty() {
        html.push_str(&escape(&run));
    }
    html
}

fn render_rest(duration: u32, dot: &str) -> String {
    let symbol = match glyphs::rest(duration) {
        Some(g) => g.to_string(),
        None => duration.to_string(),
    };
    let mut inner = div("duration", &symbol);

    if !dot.is_empty() {
        let dots: String = dot
            .chars()
            .map(|ch| match ch {
                '.' => glyphs::AUGMENTATION_DOT.to_string(),
                other => escape(&other.to_string()),
            })
            .collect();
        inner.push_str(&div("dot", &dots));
    }

    element("rest", None, None, &inner)
}
