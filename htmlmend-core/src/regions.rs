// htmlmend-core/src/regions.rs
//! The markup region classifier.
//!
//! A single forward pass over the input labels every byte span with a
//! [`RegionKind`]. Regions are contiguous, non-overlapping, and partition
//! the whole input. Both the tag balancer and the text-node escaper consume
//! this scanner, so the two passes cannot disagree about where a tag ends
//! and text begins.
//!
//! License: MIT OR Apache-2.0

/// The kind of markup construct governing a span of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Plain character data outside any markup construct.
    Text,
    /// An opening tag, `<name ...>`.
    TagOpen,
    /// A closing tag, `</name>`.
    TagClose,
    /// An HTML comment, `<!-- ... -->`.
    Comment,
    /// Raw content between `<script ...>` and `</script`.
    ScriptBody,
    /// Raw content between `<style ...>` and `</style`.
    StyleBody,
    /// A doctype, other `<!...>` declaration, or `<?...?>` instruction.
    Directive,
}

/// A classified span of the input, as byte offsets `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// The raw source slice this region covers.
    ///
    /// Boundaries always fall on `<` / `>` delimiters or the ends of the
    /// input, all of which are char boundaries in valid UTF-8.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Whether the region's construct reached its terminator before end of
    /// input. A trailing `<div`, `<!-- ...`, or script body with no close
    /// tag is unterminated and is passed through verbatim downstream.
    pub fn is_terminated(&self, text: &str) -> bool {
        let raw = self.slice(text);
        match self.kind {
            RegionKind::Text => true,
            RegionKind::Comment => raw.len() >= 7 && raw.ends_with("-->"),
            RegionKind::TagOpen | RegionKind::TagClose | RegionKind::Directive => {
                raw.ends_with('>')
            }
            // Script and style bodies end where the close tag begins; a
            // body that runs to end of input never saw one.
            RegionKind::ScriptBody | RegionKind::StyleBody => self.end < text.len(),
        }
    }
}

/// Which raw-text container, if any, the scanner is inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawContainer {
    Script,
    Style,
}

/// Classifies the whole input in one left-to-right pass.
///
/// A `<` only opens a markup construct when followed by an ASCII letter
/// (opening tag), `/` plus an ASCII letter (closing tag), `!`, or `?`;
/// any other `<` is ordinary text and stays part of the surrounding Text
/// region. That is what lets `5 < 10 in <div>x</div>` classify the first
/// `<` as text while still seeing the `div` tags as tags.
pub fn scan_regions(text: &str) -> Vec<Region> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut regions: Vec<Region> = Vec::new();
    let mut raw_container: Option<RawContainer> = None;
    let mut i = 0;

    while i < len {
        if let Some(container) = raw_container {
            let (kind, closer) = match container {
                RawContainer::Script => (RegionKind::ScriptBody, b"</script".as_slice()),
                RawContainer::Style => (RegionKind::StyleBody, b"</style".as_slice()),
            };
            let end = find_ci(bytes, i, closer).unwrap_or(len);
            if end > i {
                regions.push(Region { kind, start: i, end });
            }
            raw_container = None;
            i = end;
            continue;
        }

        if bytes[i] == b'<' && is_markup_start(bytes, i) {
            if starts_with_ci(bytes, i, b"<!--") {
                let end = find_ci(bytes, i + 4, b"-->").map_or(len, |p| p + 3);
                regions.push(Region { kind: RegionKind::Comment, start: i, end });
                i = end;
                continue;
            }
            if bytes[i + 1] == b'!' || bytes[i + 1] == b'?' {
                let end = find_byte(bytes, i + 1, b'>').map_or(len, |p| p + 1);
                regions.push(Region { kind: RegionKind::Directive, start: i, end });
                i = end;
                continue;
            }

            let closing = bytes[i + 1] == b'/';
            let kind = if closing { RegionKind::TagClose } else { RegionKind::TagOpen };
            let Some(gt) = find_byte(bytes, i + 1, b'>') else {
                // Unterminated tag: the remainder is one trailing
                // tag-in-progress span (fail-soft).
                regions.push(Region { kind, start: i, end: len });
                break;
            };
            let end = gt + 1;
            regions.push(Region { kind, start: i, end });
            if !closing {
                if starts_with_ci(bytes, i, b"<script") {
                    raw_container = Some(RawContainer::Script);
                } else if starts_with_ci(bytes, i, b"<style") {
                    raw_container = Some(RawContainer::Style);
                }
            }
            i = end;
            continue;
        }

        // Text run: extends up to the next `<` that actually starts markup.
        let mut end = i + 1;
        while end < len && !(bytes[end] == b'<' && is_markup_start(bytes, end)) {
            end += 1;
        }
        regions.push(Region { kind: RegionKind::Text, start: i, end });
        i = end;
    }

    regions
}

/// True when the `<` at `at` begins a tag, comment, directive, or
/// processing instruction rather than being a stray text character.
fn is_markup_start(bytes: &[u8], at: usize) -> bool {
    debug_assert_eq!(bytes[at], b'<');
    match bytes.get(at + 1) {
        Some(b'!') | Some(b'?') => true,
        Some(b'/') => matches!(bytes.get(at + 2), Some(c) if c.is_ascii_alphabetic()),
        Some(c) => c.is_ascii_alphabetic(),
        None => false,
    }
}

fn starts_with_ci(bytes: &[u8], at: usize, prefix: &[u8]) -> bool {
    bytes.len() >= at + prefix.len()
        && bytes[at..at + prefix.len()].eq_ignore_ascii_case(prefix)
}

fn find_ci(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || from + needle.len() > bytes.len() {
        return None;
    }
    (from..=bytes.len() - needle.len())
        .find(|&i| bytes[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from.min(bytes.len())..]
        .iter()
        .position(|&b| b == needle)
        .map(|p| p + from)
}
