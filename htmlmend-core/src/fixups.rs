// htmlmend-core/src/fixups.rs
//! The encoding fixup pass.
//!
//! Applies an ordered table of literal (pattern, replacement) substitutions
//! over the whole document. The pass is deliberately region-unaware:
//! mojibake is an encoding artifact, not markup, so comments and script
//! bodies get fixed too. Table order matters — a short pattern applied
//! before a longer one sharing its prefix would corrupt the longer match,
//! which is why [`crate::config::RepairConfig::validate`] rejects such
//! tables.
//!
//! License: MIT OR Apache-2.0

use log::debug;

use crate::config::EncodingFixup;

/// Rewrites every occurrence of each fixup pattern, in table order.
///
/// Returns the rewritten text and the number of substitutions performed.
/// Total over all inputs; a pattern that never occurs is a no-op.
pub fn apply_fixups(text: &str, fixups: &[EncodingFixup]) -> (String, usize) {
    let mut out = text.to_string();
    let mut applied = 0;
    for fixup in fixups {
        if fixup.pattern.is_empty() {
            continue;
        }
        let occurrences = out.matches(fixup.pattern.as_str()).count();
        if occurrences > 0 {
            debug!(
                "fixup {:?} -> {:?}: {} occurrence(s)",
                fixup.pattern, fixup.replace_with, occurrences
            );
            out = out.replace(fixup.pattern.as_str(), &fixup.replace_with);
            applied += occurrences;
        }
    }
    (out, applied)
}
