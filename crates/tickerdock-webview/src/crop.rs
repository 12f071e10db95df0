//! Crop stylesheet and injection script generation.
//!
//! The quote page ships fixed navigation chrome at the top and an app
//! download banner at the bottom. Both are hidden by pulling the body up
//! and down with negative margins and suppressing page-level scrolling,
//! then marking body children as the scrollable content region.

/// Class added to body children so they keep an internal scrollbar after
/// the page-level overflow is hidden.
const CONTENT_CLASS: &str = "tickerdock-content";

// =============================================================================
// GENERATION
// =============================================================================

/// Generate the crop stylesheet for the given pixel offsets.
pub fn crop_css(top: u32, bottom: u32) -> String {
    format!(
        "body {{\n  margin-top: -{top}px !important;\n  margin-bottom: -{bottom}px !important;\n  overflow: hidden !important;\n}}\nhtml {{\n  overflow: hidden !important;\n}}\n.fixed-top, .header, .top-bar {{\n  display: none !important;\n}}\n.fixed-bottom, .footer, .bottom-bar {{\n  display: none !important;\n}}\n.{CONTENT_CLASS} {{\n  height: 100vh;\n  overflow-y: auto;\n}}\n"
    )
}

/// Generate a self-invoking script that appends the crop stylesheet and
/// tags body children as the scroll region.
///
/// The stylesheet is embedded as a JSON string literal, which is also a
/// valid (fully escaped) JavaScript string literal.
pub fn crop_injection_js(top: u32, bottom: u32) -> String {
    let css = crop_css(top, bottom);
    let css_literal = serde_json::to_string(&css).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "(function() {{\n  var style = document.createElement('style');\n  style.textContent = {css_literal};\n  document.head.appendChild(style);\n  var children = document.body.children;\n  for (var i = 0; i < children.length; i++) {{\n    children[i].classList.add('{CONTENT_CLASS}');\n  }}\n}})();"
    )
}

// =============================================================================
// TESTS
// =============================================================================
