//! Small helpers shared by the projection and the HTML writer.

use std::fmt::Write;

use crate::entity::RecordId;

/// Element id of the card for a record.
///
/// ASCII alphanumerics and `-` are kept. Every other byte, `_` included,
/// is written as `_XX` (uppercase hex), so distinct ids never collide.
pub fn card_dom_id(id: &RecordId) -> String {
    let raw = id.to_string();
    let mut dom_id = String::with_capacity(raw.len() + 5);
    dom_id.push_str("card-");
    for b in raw.bytes() {
        if b.is_ascii_alphanumeric() || b == b'-' {
            dom_id.push(b as char);
        } else {
            let _ = write!(dom_id, "_{:02X}", b);
        }
    }
    dom_id
}

/// Rating as the page prints it: `5`, `4.5`.
pub fn format_rating(rating: f64) -> String {
    format!("{}", rating)
}

/// HTML-escape a string into the output buffer.
pub fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    html_escape_into(&mut out, s);
    out
}
