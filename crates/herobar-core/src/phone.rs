//! Dial-link normalization for call-to-action hrefs.

/// Reduce a display phone number to a `tel:` href.
///
/// Trims the input; empty in, empty out (the caller renders an inert
/// placeholder link). Every character except ASCII digits and a leading `+`
/// is stripped. No locale-aware parsing and no plausibility validation:
/// malformed numbers pass through silently as long as at least one digit or
/// plus survives the strip.
#[must_use]
pub fn to_dial_href(display: &str) -> String {
    let raw = display.trim();
    if raw.is_empty() {
        return String::new();
    }

    let mut clean = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        if c.is_ascii_digit() || (c == '+' && i == 0) {
            clean.push(c);
        }
    }

    if clean.is_empty() {
        String::new()
    } else {
        format!("tel:{clean}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(to_dial_href(""), "");
    }

    #[test]
    fn whitespace_only_returns_empty() {
        assert_eq!(to_dial_href("   "), "");
    }

    #[test]
    fn spaces_are_stripped() {
        assert_eq!(to_dial_href("  0800 123 456  "), "tel:0800123456");
    }

    #[test]
    fn leading_plus_is_kept() {
        assert_eq!(to_dial_href("+44 20 7946 0958"), "tel:+442079460958");
    }

    #[test]
    fn interior_plus_is_dropped() {
        assert_eq!(to_dial_href("0800+123"), "tel:0800123");
    }

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(to_dial_href("(0161) 496-0000"), "tel:01614960000");
    }

    #[test]
    fn no_digits_or_plus_returns_empty() {
        assert_eq!(to_dial_href("call us"), "");
    }

    #[test]
    fn lone_plus_is_a_valid_href() {
        // No plausibility validation by design.
        assert_eq!(to_dial_href("+"), "tel:+");
    }
}
