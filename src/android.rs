//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{chart_to_json, parse_chart, render_options_from_json, render_text_to_html};

/// Render chart text to HTML.
///
/// Called from Kotlin as:
///   external fun renderText(text: String, optionsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_chartlib_app_ChartLib_renderText(
    mut env: JNIEnv,
    _class: JClass,
    text: JString,
    options_json: JString,
) -> jstring {
    let text: String = match env.get_string(&text) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let options_json: Option<String> = if options_json.is_null() {
        None
    } else {
        env.get_string(&options_json).ok().map(|s| s.into())
    };
    let options = render_options_from_json(options_json.as_deref());

    match render_text_to_html(&text, options.as_ref()) {
        Ok(html) => match env.new_string(&html) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::warn!("renderText failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Parse chart text and return the chart model as JSON.
///
/// Called from Kotlin as:
///   external fun chartJson(text: String): String?
#[no_mangle]
pub extern "system" fn Java_com_chartlib_app_ChartLib_chartJson(
    mut env: JNIEnv,
    _class: JClass,
    text: JString,
) -> jstring {
    let text: String = match env.get_string(&text) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match parse_chart(&text).and_then(|chart| chart_to_json(&chart)) {
        Ok(json) => match env.new_string(&json) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::warn!("chartJson failed: {e}");
            std::ptr::null_mut()
        }
    }
}
