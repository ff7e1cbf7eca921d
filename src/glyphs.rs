//! Glyph tables — token spellings and numeric codes mapped to the symbols
//! the renderer emits. Code points in the private use area are SMuFL.

// ── Bar lines ───────────────────────────────────────────────────────
pub const BARLINE_SINGLE: &str = "\u{1D100}";
pub const BARLINE_DOUBLE: &str = "\u{1D101}";
pub const BARLINE_FINAL: &str = "\u{1D102}";
pub const REPEAT_OPEN: &str = "\u{1D106}";
pub const REPEAT_CLOSE: &str = "\u{1D107}";
pub const DOUBLE_REPEAT_OPEN: &str = "\u{E040}";
pub const DOUBLE_REPEAT_CLOSE: &str = "\u{E041}";

/// Bar-line spellings. `;` is an alternative to `|` for keyboards where
/// the pipe is awkward to reach.
const BARLINES: &[(&str, &str)] = &[
    (";", BARLINE_SINGLE),
    (";;", BARLINE_DOUBLE),
    (";;.", BARLINE_FINAL),
    ("|", BARLINE_SINGLE),
    ("||", BARLINE_DOUBLE),
    ("||.", BARLINE_FINAL),
    ("[", REPEAT_OPEN),
    ("]", REPEAT_CLOSE),
    ("[[", DOUBLE_REPEAT_OPEN),
    ("]]", DOUBLE_REPEAT_CLOSE),
];

// ── Accidentals ─────────────────────────────────────────────────────
pub const FLAT: &str = "\u{E260}";
pub const SHARP: &str = "\u{E262}";
pub const DOUBLE_SHARP: &str = "\u{E263}";
pub const DOUBLE_FLAT: &str = "\u{E264}";
pub const TRIPLE_SHARP: &str = "\u{E265}";
pub const TRIPLE_FLAT: &str = "\u{E266}";

const ACCIDENTALS: &[(&str, &str)] = &[
    ("b", FLAT),
    ("bb", DOUBLE_FLAT),
    ("bbb", TRIPLE_FLAT),
    ("#", SHARP),
    ("##", DOUBLE_SHARP),
    ("###", TRIPLE_SHARP),
];

// ── Rests ───────────────────────────────────────────────────────────
const RESTS: &[(u32, &str)] = &[
    (0, "\u{E4E2}"), // breve
    (1, "\u{E4E3}"),
    (2, "\u{E4E4}"),
    (4, "\u{E4E5}"),
    (8, "\u{E4E6}"),
    (16, "\u{E4E7}"),
    (32, "\u{E4E8}"),
    (64, "\u{E4E9}"),
    (128, "\u{E4EA}"),
];

pub const AUGMENTATION_DOT: &str = "\u{E1E7}";

// ── Repeat marks ────────────────────────────────────────────────────
pub const MEASURE_REPEAT: &str = "\u{E504}";
pub const SIMPLE_REPEAT: &str = "\u{E500}";
pub const MULTI_REPEAT: &str = "\u{E501}";

pub const CHORD_SLASH: &str = "\u{E87C}";

/// Character that starts a repeat token.
pub const REPEAT_MARKER: char = '%';
/// Character that starts a rest token.
pub const REST_MARKER: char = 'r';

/// Resolve a bar-line token to its glyph. Exact matches only.
pub fn barline(token: &str) -> Option<&'static str> {
    lookup(BARLINES, token)
}

/// Glyph for a whole accidental run (`b`, `##`, ...).
pub fn accidental(run: &str) -> Option<&'static str> {
    lookup(ACCIDENTALS, run)
}

/// Glyph for a rest of the given note-value denominator.
pub fn rest(duration: u32) -> Option<&'static str> {
    RESTS
        .iter()
        .find(|(d, _)| *d == duration)
        .map(|(_, glyph)| *glyph)
}

/// Repeat glyph selection: a measure repeat when the span is zero, the
/// simple mark for a single `%`, the multi-mark glyph otherwise.
pub fn repeat(count: usize, measures: u32) -> &'static str {
    if measures == 0 {
        MEASURE_REPEAT
    } else if count <= 1 {
        SIMPLE_REPEAT
    } else {
        MULTI_REPEAT
    }
}

fn lookup<'a>(table: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, glyph)| *glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barline_spellings_share_glyphs() {
        assert_eq!(barline("|"), Some(BARLINE_SINGLE));
        assert_eq!(barline(";"), barline("|"));
        assert_eq!(barline(";;."), Some(BARLINE_FINAL));
        assert_eq!(barline("[["), Some(DOUBLE_REPEAT_OPEN));
        assert_eq!(barline("|||"), None);
        assert_eq!(barline(""), None);
    }

    #[test]
    fn accidental_runs() {
        assert_eq!(accidental("b"), Some(FLAT));
        assert_eq!(accidental("##"), Some(DOUBLE_SHARP));
        assert_eq!(accidental("###"), Some(TRIPLE_SHARP));
        assert_eq!(accidental("b#"), None);
    }

    #[test]
    fn rest_durations() {
        assert_eq!(rest(4), Some("\u{E4E5}"));
        assert_eq!(rest(0), Some("\u{E4E2}"));
        assert_eq!(rest(128), Some("\u{E4EA}"));
        assert_eq!(rest(3), None);
    }

    #[test]
    fn repeat_glyph_selection() {
        assert_eq!(repeat(1, 0), MEASURE_REPEAT);
        assert_eq!(repeat(3, 0), MEASURE_REPEAT);
        assert_eq!(repeat(1, 1), SIMPLE_REPEAT);
        assert_eq!(repeat(1, 4), SIMPLE_REPEAT);
        assert_eq!(repeat(2, 3), MULTI_REPEAT);
    }
}
