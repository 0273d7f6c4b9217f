// htmlmend-core/src/balancer.rs
//! The tag balancer.
//!
//! A stack automaton over the classifier's tag regions. Only names in the
//! configured trackable set are pushed and popped; every other tag, and
//! every non-tag region, is emitted byte-identical. Repairs are counted so
//! the run report can surface how much rewriting happened.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;

use log::debug;

use crate::config::RepairConfig;
use crate::regions::{scan_regions, Region, RegionKind};

/// A tag region decoded into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    /// Lowercased tag name, attributes stripped.
    pub name: String,
    /// True for `</name>`.
    pub is_closing: bool,
    /// True for an opening tag ending in `/>`.
    pub is_self_closing: bool,
    /// True when the name is in the configured void set.
    pub is_void: bool,
}

/// Parses a raw tag slice (`<name attr=..>` or `</name>`) into a token.
///
/// Returns `None` when no tag name can be extracted; such tags pass
/// through the balancer untouched.
pub fn parse_tag(raw: &str, is_closing: bool, void_tags: &HashSet<String>) -> Option<TagToken> {
    let inner = raw.strip_prefix('<')?;
    let inner = inner.strip_prefix('/').unwrap_or(inner);
    let name: String = inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase();
    if name.is_empty() {
        return None;
    }
    let is_self_closing = !is_closing && raw.trim_end().ends_with("/>");
    let is_void = void_tags.contains(&name);
    Some(TagToken { name, is_closing, is_self_closing, is_void })
}

/// Counts of the structural repairs a balance pass performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceTally {
    /// Closing tags with no matching open anywhere on the stack, dropped.
    pub orphan_closes_dropped: usize,
    /// Closing tags the balancer inserted itself.
    pub closes_synthesized: usize,
}

/// Balances trackable tags in one pass over the classified regions.
pub struct TagBalancer {
    trackable: HashSet<String>,
    void: HashSet<String>,
}

impl TagBalancer {
    pub fn new(config: &RepairConfig) -> Self {
        Self {
            trackable: config.trackable_set(),
            void: config.void_set(),
        }
    }

    /// Rewrites `text` into a stream where every trackable tag is
    /// well-nested: mis-nested inner tags are implicitly closed, orphan
    /// closes are dropped, and tags still open at end of input are closed
    /// in LIFO order.
    pub fn balance(&self, text: &str) -> (String, BalanceTally) {
        let regions = scan_regions(text);
        let mut out = String::with_capacity(text.len() + 16);
        let mut stack: Vec<String> = Vec::new();
        let mut tally = BalanceTally::default();

        // A trailing unterminated tag fragment is emitted after the
        // end-of-input synthesized closes; an input ending inside an
        // unterminated comment or raw-text body gets no synthesized closes
        // at all, since they would land inside that construct.
        let mut trailing_fragment: Option<Region> = None;
        let mut tail_is_opaque = false;

        for region in &regions {
            if !region.is_terminated(text) {
                match region.kind {
                    RegionKind::TagOpen | RegionKind::TagClose | RegionKind::Directive => {
                        trailing_fragment = Some(*region);
                    }
                    _ => {
                        tail_is_opaque = true;
                        out.push_str(region.slice(text));
                    }
                }
                continue;
            }

            match region.kind {
                RegionKind::TagOpen | RegionKind::TagClose => {
                    self.emit_tag(region, text, &mut out, &mut stack, &mut tally);
                }
                _ => out.push_str(region.slice(text)),
            }
        }

        if tail_is_opaque {
            if !stack.is_empty() {
                debug!(
                    "input ends inside an unterminated construct; leaving {} tag(s) unclosed",
                    stack.len()
                );
            }
        } else {
            for name in stack.drain(..).rev() {
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
                tally.closes_synthesized += 1;
            }
        }
        if let Some(fragment) = trailing_fragment {
            out.push_str(fragment.slice(text));
        }

        (out, tally)
    }

    fn emit_tag(
        &self,
        region: &Region,
        text: &str,
        out: &mut String,
        stack: &mut Vec<String>,
        tally: &mut BalanceTally,
    ) {
        let raw = region.slice(text);
        let is_closing = region.kind == RegionKind::TagClose;
        let Some(token) = parse_tag(raw, is_closing, &self.void) else {
            out.push_str(raw);
            return;
        };

        // Void elements are never tracked, with or without a closing slash
        // or a stray matching close tag.
        if token.is_void || !self.trackable.contains(&token.name) {
            out.push_str(raw);
            return;
        }

        if !token.is_closing {
            out.push_str(raw);
            if !token.is_self_closing {
                stack.push(token.name);
            }
            return;
        }

        // Closing tag for a trackable name.
        match stack.iter().rposition(|open| *open == token.name) {
            Some(depth) => {
                // Implicitly close anything opened after the match, most
                // recent first, then emit the original close.
                for inner in stack.drain(depth + 1..).rev() {
                    debug!("synthesizing </{inner}> before {raw:?}");
                    out.push_str("</");
                    out.push_str(&inner);
                    out.push('>');
                    tally.closes_synthesized += 1;
                }
                let _ = stack.pop();
                out.push_str(raw);
            }
            None => {
                debug!("dropping orphan close {raw:?}");
                tally.orphan_closes_dropped += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balancer_for(tags: &[&str]) -> TagBalancer {
        let mut config = RepairConfig::load_default().unwrap();
        config.trackable_tags = tags.iter().map(|t| t.to_string()).collect();
        TagBalancer::new(&config)
    }

    #[test]
    fn appends_missing_close_at_end() {
        let b = balancer_for(&["div"]);
        let (out, tally) = b.balance("<div><div>Text</div>");
        assert_eq!(out, "<div><div>Text</div></div>");
        assert_eq!(tally.closes_synthesized, 1);
        assert_eq!(tally.orphan_closes_dropped, 0);
    }

    #[test]
    fn drops_orphan_close() {
        let b = balancer_for(&["div"]);
        let (out, tally) = b.balance("<div></div></div>");
        assert_eq!(out, "<div></div>");
        assert_eq!(tally.orphan_closes_dropped, 1);
        assert_eq!(tally.closes_synthesized, 0);
    }

    #[test]
    fn auto_closes_misnested_inner_tags() {
        let b = balancer_for(&["div", "section"]);
        let (out, tally) = b.balance("<section><div>x</section>");
        assert_eq!(out, "<section><div>x</div></section>");
        assert_eq!(tally.closes_synthesized, 1);
    }

    #[test]
    fn untracked_tags_pass_through_however_nested() {
        let b = balancer_for(&["div"]);
        let input = "<b><i>wrong</b></i><em>dangling";
        let (out, tally) = b.balance(input);
        assert_eq!(out, input);
        assert_eq!(tally, BalanceTally::default());
    }

    #[test]
    fn self_closing_open_is_not_pushed() {
        let b = balancer_for(&["div"]);
        let (out, tally) = b.balance("<div/>text");
        assert_eq!(out, "<div/>text");
        assert_eq!(tally.closes_synthesized, 0);
    }

    #[test]
    fn void_tags_are_never_balanced() {
        let b = balancer_for(&["div", "br"]);
        // Even a bogus </br> close must not consume or synthesize anything.
        let (out, tally) = b.balance("<div><br></br>x</div>");
        assert_eq!(out, "<div><br></br>x</div>");
        assert_eq!(tally, BalanceTally::default());
    }

    #[test]
    fn tag_names_match_case_insensitively() {
        let b = balancer_for(&["div"]);
        let (out, _) = b.balance("<DIV>x</div>");
        assert_eq!(out, "<DIV>x</div>");
        let (out, tally) = b.balance("<DIV>x");
        assert_eq!(out, "<DIV>x</div>");
        assert_eq!(tally.closes_synthesized, 1);
    }

    #[test]
    fn attributes_do_not_affect_matching() {
        let b = balancer_for(&["div"]);
        let (out, _) = b.balance(r#"<div class="a b" data-x="1">x"#);
        assert_eq!(out, r#"<div class="a b" data-x="1">x</div>"#);
    }

    #[test]
    fn comments_and_script_bodies_are_opaque() {
        let b = balancer_for(&["div"]);
        let input = "<div><!-- </div> --><script>var a = \"</div>\";</script>";
        let (out, tally) = b.balance(input);
        assert_eq!(out, format!("{input}</div>"));
        assert_eq!(tally.closes_synthesized, 1);
        assert_eq!(tally.orphan_closes_dropped, 0);
    }

    #[test]
    fn synthesized_closes_precede_trailing_fragment() {
        let b = balancer_for(&["div"]);
        let (out, tally) = b.balance("<div>abc<p");
        assert_eq!(out, "<div>abc</div><p");
        assert_eq!(tally.closes_synthesized, 1);
        // Reprocessing the repaired text is a fixed point.
        let (again, tally2) = b.balance(&out);
        assert_eq!(again, out);
        assert_eq!(tally2, BalanceTally::default());
    }

    #[test]
    fn unterminated_comment_suppresses_eof_closes() {
        let b = balancer_for(&["div"]);
        let (out, tally) = b.balance("<div><!-- dangling");
        assert_eq!(out, "<div><!-- dangling");
        assert_eq!(tally.closes_synthesized, 0);
        let (again, _) = b.balance(&out);
        assert_eq!(again, out);
    }

    #[test]
    fn doctype_passes_through() {
        let b = balancer_for(&["div"]);
        let input = "<!DOCTYPE html><div>x</div>";
        let (out, _) = b.balance(input);
        assert_eq!(out, input);
    }
}
