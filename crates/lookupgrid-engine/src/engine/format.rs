/// Code point ranges that are never printed raw in a tuple key: separators
/// other than the ASCII space (Zs, Zl, Zp), format characters (Cf), private
/// use (Co) and noncharacters. Control characters (Cc) are handled by
/// `char::is_control`. Sorted by start.
const NON_PRINTABLE: &[(u32, u32)] = &[
    (0x00a0, 0x00a0),
    (0x00ad, 0x00ad),
    (0x0600, 0x0605),
    (0x061c, 0x061c),
    (0x06dd, 0x06dd),
    (0x070f, 0x070f),
    (0x0890, 0x0891),
    (0x08e2, 0x08e2),
    (0x1680, 0x1680),
    (0x180e, 0x180e),
    (0x2000, 0x200f),
    (0x2028, 0x202f),
    (0x205f, 0x2064),
    (0x2066, 0x206f),
    (0x3000, 0x3000),
    (0xe000, 0xf8ff),
    (0xfdd0, 0xfdef),
    (0xfeff, 0xfeff),
    (0xfff9, 0xfffb),
    (0xfffe, 0xffff),
    (0x110bd, 0x110bd),
    (0x110cd, 0x110cd),
    (0x13430, 0x1343f),
    (0x1bca0, 0x1bca3),
    (0x1d173, 0x1d17a),
    (0xe0001, 0xe0001),
    (0xe0020, 0xe007f),
    (0xf0000, 0x10ffff),
];

/// Whether `c` is written as-is inside a quoted token.
fn is_printable(c: char) -> bool {
    if c.is_control() {
        return false;
    }
    let code = c as u32;
    // Every plane ends in two noncharacters.
    if code & 0xfffe == 0xfffe {
        return false;
    }
    !NON_PRINTABLE
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// Quote a coordinate token the way existing consumers expect tuple keys.
///
/// Single quotes unless the token contains `'` and no `"`, in which case
/// double quotes are used. Backslashes, the active quote and non-printable
/// characters are escaped.
pub fn quote_token(token: &str) -> String {
    let quote = if token.contains('\'') && !token.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(token.len() + 2);
    out.push(quote);
    for ch in token.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&escape_code_point(c)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn escape_code_point(c: char) -> String {
    let code = c as u32;
    if code <= 0xff {
        format!("\\x{:02x}", code)
    } else if code <= 0xffff {
        format!("\\u{:04x}", code)
    } else {
        format!("\\U{:08x}", code)
    }
}

#[cfg(test)]
mod tests {
    use super::{is_printable, quote_token};

    #[test]
    fn test_plain_tokens_use_single_quotes() {
        assert_eq!(quote_token("A"), "'A'");
        assert_eq!(quote_token("100"), "'100'");
        assert_eq!(quote_token(""), "''");
        assert_eq!(quote_token("a b"), "'a b'");
    }

    #[test]
    fn test_apostrophe_switches_to_double_quotes() {
        assert_eq!(quote_token("it's"), "\"it's\"");
    }

    #[test]
    fn test_both_quote_kinds_escape_single_quote() {
        assert_eq!(quote_token("a'b\"c"), "'a\\'b\"c'");
    }

    #[test]
    fn test_control_characters_are_escaped() {
        assert_eq!(quote_token("a\\b"), "'a\\\\b'");
        assert_eq!(quote_token("a\nb\t"), "'a\\nb\\t'");
        assert_eq!(quote_token("\u{1}"), "'\\x01'");
        assert_eq!(quote_token("\u{85}"), "'\\x85'");
    }

    #[test]
    fn test_separators_and_format_characters_are_escaped() {
        assert_eq!(quote_token("\u{a0}x"), "'\\xa0x'");
        assert_eq!(quote_token("\u{ad}"), "'\\xad'");
        assert_eq!(quote_token("\u{200b}"), "'\\u200b'");
        assert_eq!(quote_token("\u{2028}"), "'\\u2028'");
        assert_eq!(quote_token("\u{2029}"), "'\\u2029'");
        assert_eq!(quote_token("\u{3000}"), "'\\u3000'");
        assert_eq!(quote_token("\u{feff}"), "'\\ufeff'");
    }

    #[test]
    fn test_private_use_and_noncharacters_are_escaped() {
        assert_eq!(quote_token("\u{e000}"), "'\\ue000'");
        assert_eq!(quote_token("\u{fffe}"), "'\\ufffe'");
        assert_eq!(quote_token("\u{1fffe}"), "'\\U0001fffe'");
        assert_eq!(quote_token("\u{e0041}"), "'\\U000e0041'");
        assert_eq!(quote_token("\u{10fffd}"), "'\\U0010fffd'");
    }

    #[test]
    fn test_non_ascii_is_kept() {
        assert_eq!(quote_token("é"), "'é'");
        assert_eq!(quote_token("\u{201c}A\u{201d}"), "'\u{201c}A\u{201d}'");
        assert_eq!(quote_token("\u{1f600}"), "'\u{1f600}'");
        assert!(is_printable(' '));
        assert!(!is_printable('\u{202f}'));
    }
}
