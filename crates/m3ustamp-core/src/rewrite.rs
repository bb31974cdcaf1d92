//! The `#EXTINF` stamping transform.
//!
//! Inserts one attribute token right after the duration field of every
//! stream-description line that does not already carry it. Everything else
//! passes through untouched.

/// Marker that opens a stream-description line.
const EXTINF_MARKER: &str = "#EXTINF:";

/// Result of stamping one playlist document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The full document, lines rejoined with `\n`.
    pub text: String,
    /// Number of lines that received the attribute.
    pub changed: usize,
}

/// Length of the duration token at the start of `rest` (the text following
/// `#EXTINF:`): an optional minus sign then one or more ASCII digits.
/// `None` when the marker is not immediately followed by a duration.
fn duration_token_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i = 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    Some(i)
}

/// Stamps one line, or returns `None` when the line is not a stampable
/// `#EXTINF` line (wrong prefix, attribute already present, or no duration
/// token right after the marker).
fn stamp_line(line: &str, attribute: &str) -> Option<String> {
    let rest = line.strip_prefix(EXTINF_MARKER)?;
    if line.contains(attribute) {
        return None;
    }
    let token_len = duration_token_len(rest)?;

    let split_at = EXTINF_MARKER.len() + token_len;
    let (head, tail) = line.split_at(split_at);
    Some(format!("{head} {attribute}{tail}"))
}

/// Applies the stamping transform to a whole playlist.
///
/// Lines are processed independently and rejoined with `\n`; order is
/// preserved and no line is added or removed. Idempotent: a second pass over
/// the output changes nothing and reports 0.
pub fn stamp_playlist(input: &str, attribute: &str) -> RewriteOutcome {
    let mut out: Vec<String> = Vec::new();
    let mut changed = 0;

    for line in input.lines() {
        match stamp_line(line, attribute) {
            Some(stamped) => {
                out.push(stamped);
                changed += 1;
            }
            None => out.push(line.to_string()),
        }
    }

    RewriteOutcome {
        text: out.join("\n"),
        changed,
    }
}
