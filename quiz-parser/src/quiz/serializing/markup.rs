//! Markup stripping
//!
//! Reduces rich text to a single plain line for the canonical text dialect. Only used on the way
//! out; parsed fields keep their markup.
use once_cell::sync::Lazy;
use regex::Regex;

static BREAK_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[A-Za-z!][^<>]*>").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Entity bodies longer than this are not entities.
const MAX_ENTITY_LEN: usize = 32;

/// Remove tags, decode entities, collapse whitespace and trim.
///
/// Break tags become spaces so that lines merged with a break marker stay word-separated.
/// Tags are removed before entities are decoded, so an escaped `&lt;b&gt;` survives as text.
pub fn strip_markup(text: &str) -> String {
    let text = BREAK_TAG.replace_all(text, " ");
    let text = TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Decode named and numeric HTML entities. Unknown or malformed entities stay literal.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];
        match entity_at(tail) {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Escape what [strip_markup] would otherwise consume, so that stripping the result gives
/// `text` back for any already stripped `text`.
///
/// Only a `<` that could open a tag and an `&` that opens a known entity are escaped; a bare
/// `x < y` or `A & B` is written as is.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        let tail = &text[i + c.len_utf8()..];
        match c {
            '<' if tail.starts_with(opens_tag) => out.push_str("&lt;"),
            '&' if entity_at(tail).is_some() => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}

fn opens_tag(next: char) -> bool {
    next.is_ascii_alphabetic() || next == '!' || next == '/'
}

/// The entity opening `tail` (the text right after an `&`) and the offset of its `;`.
fn entity_at(tail: &str) -> Option<(char, usize)> {
    tail.find(';')
        .filter(|&end| end > 0 && end <= MAX_ENTITY_LEN)
        .and_then(|end| decode_entity(&tail[..end]).map(|c| (c, end)))
}

fn decode_entity(body: &str) -> Option<char> {
    if let Some(hex) = body
        .strip_prefix("#x")
        .or_else(|| body.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(decimal) = body.strip_prefix('#') {
        return decimal.parse::<u32>().ok().and_then(char::from_u32);
    }
    let c = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '–',
        "mdash" => '—',
        "hellip" => '…',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "times" => '×',
        "divide" => '÷',
        "deg" => '°',
        "plusmn" => '±',
        "le" => '≤',
        "ge" => '≥',
        "ne" => '≠',
        "copy" => '©',
        "reg" => '®',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(strip_markup("<b>Bold</b> and <i>italic</i>"), "Bold and italic");
        assert_eq!(strip_markup("<p class=\"x\">Para</p>"), "Para");
        assert_eq!(strip_markup("H<sub>2</sub>O"), "H2O");
        assert_eq!(strip_markup("<!-- note -->kept"), "kept");
    }

    #[test]
    fn test_bare_angle_brackets_are_not_tags() {
        assert_eq!(strip_markup("x < y > z"), "x < y > z");
    }

    #[test]
    fn test_break_tags_become_spaces() {
        assert_eq!(strip_markup("Capital?<br>राजधानी?"), "Capital? राजधानी?");
        assert_eq!(strip_markup("a<BR/>b<br />c"), "a b c");
    }

    #[test]
    fn test_decodes_entities_after_stripping() {
        assert_eq!(strip_markup("5 &lt; 6 &amp;&amp; 7 &gt; 6"), "5 < 6 && 7 > 6");
        assert_eq!(strip_markup("&lt;b&gt;literal&lt;/b&gt;"), "<b>literal</b>");
        assert_eq!(strip_markup("&#65;&#x42;&#X43;"), "ABC");
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        assert_eq!(strip_markup("  a \n\t b  "), "a b");
        assert_eq!(strip_markup("a&nbsp;&nbsp;b"), "a b");
        assert_eq!(strip_markup(""), "");
    }

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        assert_eq!(escape_markup("x < y & z"), "x < y & z");
        assert_eq!(escape_markup("AT&T; 3<4"), "AT&T; 3<4");
    }

    #[test]
    fn test_escape_protects_decoded_markup() {
        let stripped = strip_markup("&lt;div&gt;block&lt;/div&gt;");
        assert_eq!(stripped, "<div>block</div>");
        assert_eq!(escape_markup(&stripped), "&lt;div>block&lt;/div>");
        assert_eq!(strip_markup(&escape_markup(&stripped)), stripped);

        let stripped = strip_markup("&amp;lt;br&amp;gt; &amp;amp;");
        assert_eq!(stripped, "&lt;br&gt; &amp;");
        assert_eq!(strip_markup(&escape_markup(&stripped)), stripped);
    }

    #[test]
    fn test_unknown_entities_stay_literal() {
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("&;"), "&;");
        assert_eq!(decode_entities("&#xZZ;"), "&#xZZ;");
        assert_eq!(decode_entities("a & b; c"), "a & b; c");
    }
}
