//! Shared constants for the chart renderer.

// ── Grid tracks ─────────────────────────────────────────────────────
pub(super) const DEFAULT_BAR_TRACK: &str = "var(--template-bar)"; // narrow
pub(super) const DEFAULT_CHORD_TRACK: &str = "var(--template-chord)"; // wide

// ── Standalone document ─────────────────────────────────────────────
pub(super) const DOCUMENT_TITLE: &str = "Chart";
pub(super) const STYLESHEET: &str = "\
:root { --template-bar: min-content; --template-chord: minmax(4em, 1fr); }
grid { display: grid; align-items: center; font-family: 'Bravura Text', serif; }
heading1 { font-size: 2em; font-weight: bold; }
heading2 { font-size: 1.5em; font-weight: bold; }
heading3 { font-size: 1.2em; font-weight: bold; }
section .title { border: 1px solid #333333; padding: 0 0.3em; font-weight: bold; }
spacer { height: 1em; }
bar { display: flex; align-items: center; }
bar .hi, bar .lo { font-size: 0.7em; line-height: 1; }
chord { display: flex; align-items: baseline; }
chord .alteration, chord .root { font-size: 0.7em; }
.tilt { font-size: 0.8em; }";
