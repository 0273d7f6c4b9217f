// htmlmend-core/src/escaper.rs
//! The text-node escaper.
//!
//! Rewrites raw `<` and `>` characters found in Text regions into `&lt;`
//! and `&gt;`. Tag, comment, script, style, and directive regions pass
//! through byte-identical. The pass can be disabled via config, in which
//! case the pipeline skips it entirely.
//!
//! License: MIT OR Apache-2.0

use crate::regions::{scan_regions, RegionKind};

/// Escapes stray angle brackets in text nodes.
///
/// Returns the rewritten text and the number of characters escaped.
pub fn escape_text_angles(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut escaped = 0;
    for region in scan_regions(text) {
        let raw = region.slice(text);
        if region.kind != RegionKind::Text {
            out.push_str(raw);
            continue;
        }
        for ch in raw.chars() {
            match ch {
                '<' => {
                    out.push_str("&lt;");
                    escaped += 1;
                }
                '>' => {
                    out.push_str("&gt;");
                    escaped += 1;
                }
                _ => out.push(ch),
            }
        }
    }
    (out, escaped)
}
