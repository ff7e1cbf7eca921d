//! chartlib — lead sheet chord chart parser and grid layout library.
//!
//! Charts are plain text: one row per line, whitespace-separated tokens for
//! chords (`Bb7#11/D`), bar lines (`|`, `||`, `[`, ...), time signatures
//! (`3/4`), rests (`r8.`) and repeats (`%`). `# Title` lines are headings,
//! `(A)` lines are section marks and blank lines are spacers.
//!
//! # Example
//! ```no_run
//! use chartlib::parse_chart;
//!
//! let chart = parse_chart("# Blues\n| 4/4 F7 | Bb7 | F7 | % |").unwrap();
//! println!("Rows: {}", chart.rows().len());
//! println!("Tracks: {}", chart.columns_count());
//! ```

pub mod columns;
pub mod error;
pub mod event;
pub mod glyphs;
pub mod model;
pub mod parser;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

use std::path::Path;

pub use columns::analyze_columns;
pub use error::{ChartError, TokenError};
pub use event::parse_event;
pub use model::*;
pub use parser::parse_chart;
pub use renderer::{render_chart_to_html, RenderOptions};

/// Parse a chart file from a file path.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Chart, ChartError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bytes(&data)
}

/// Parse a chart from raw UTF-8 bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Chart, ChartError> {
    let text = std::str::from_utf8(data)?;
    parse_chart(text)
}

/// Convert a parsed chart to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn chart_to_json(chart: &Chart) -> Result<String, ChartError> {
    Ok(serde_json::to_string_pretty(chart)?)
}

/// Parse chart text and render it directly to HTML.
/// Convenience function combining parsing and rendering.
///
/// Pass `None` for `options` to use the defaults.
pub fn render_text_to_html(text: &str, options: Option<&RenderOptions>) -> Result<String, ChartError> {
    let chart = parse_chart(text)?;
    Ok(render_chart_to_html(&chart, options))
}

/// Parse a chart file and render it to HTML.
pub fn render_file_to_html<P: AsRef<Path>>(
    path: P,
    options: Option<&RenderOptions>,
) -> Result<String, ChartError> {
    let chart = parse_file(path)?;
    Ok(render_chart_to_html(&chart, options))
}

/// Decode render options sent as JSON by FFI callers. Empty or invalid JSON
/// falls back to the defaults.
pub fn render_options_from_json(json: Option<&str>) -> Option<RenderOptions> {
    let json = json.map(str::trim).filter(|j| !j.is_empty())?;
    match serde_json::from_str(json) {
        Ok(options) => Some(options),
        Err(e) => {
            log::warn!("Ignoring invalid render options: {e}");
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Parse chart text and return HTML as a C string.
/// The caller must free the returned string with `chartlib_free_string`.
///
/// `options_json` may be null to use the default render options.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string. `options_json`
/// must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn chartlib_render_text(
    text: *const c_char,
    options_json: *const c_char,
) -> *mut c_char {
    if text.is_null() {
        return std::ptr::null_mut();
    }
    let text = match unsafe { CStr::from_ptr(text) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };
    let options_json = if options_json.is_null() {
        None
    } else {
        unsafe { CStr::from_ptr(options_json) }.to_str().ok()
    };

    let options = render_options_from_json(options_json);
    match render_text_to_html(text, options.as_ref()) {
        Ok(html) => CString::new(html).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Parse chart text and return the chart model as a JSON C string.
/// The caller must free the returned string with `chartlib_free_string`.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chartlib_chart_json(text: *const c_char) -> *mut c_char {
    if text.is_null() {
        return std::ptr::null_mut();
    }
    let text = match unsafe { CStr::from_ptr(text) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match parse_chart(text).and_then(|chart| chart_to_json(&chart)) {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by chartlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chartlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chartlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
