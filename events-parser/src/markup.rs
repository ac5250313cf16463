use once_cell::sync::Lazy;
use regex::{Captures, Regex};

macro_rules! regex {
    ($pattern:expr) => {{
        static RE: Lazy<Regex> = Lazy::new(|| Regex::new($pattern).unwrap());
        &RE
    }};
}

/// Reduces one `>`-split summary fragment to plain, paragraph-structured
/// text.
///
/// The rewrites run in a fixed order because later rules depend on earlier
/// ones having removed tag delimiters. The input is not markup in any real
/// sense, just tag debris left over from splitting the summary on `>`, so
/// this is token scrubbing rather than HTML parsing.
pub fn clean_fragment(fragment: &str) -> String {
    let text = regex!(r"/[a-z]+").replace_all(fragment, "");

    // A standalone `p` is a paragraph-tag remnant unless it starts an
    // abbreviation like "p.m.".
    let text = regex!(r"\bp\b(.?)").replace_all(&text, |caps: &Captures| {
        if &caps[1] == "." {
            caps[0].to_string()
        } else {
            format!("\n\n{}", &caps[1])
        }
    });

    let text = text.replace("span", "");
    let text = text.replace(" em ", "");
    let text = text.replace("nbsp;", "");
    let text = text.replace(" b ", "");
    let text = regex!(r"<[a-z]+").replace_all(&text, "").into_owned();
    let text = text.replace('>', "");
    let text = text.replace('<', "");
    let text = text.replace(" br ", "");
    let text = text.replace("span", "");
    let text = text.replace(" i ", "");

    let text = regex!(r"\bli\b").replace_all(&text, "\u{2022}");
    let text = regex!(r"\bul\b").replace_all(&text, "\n");
    let text = regex!(r"\b/ul\b").replace_all(&text, "\n");
    let text = regex!(r"\b/li\b").replace_all(&text, "\n");
    let text = regex!(r"Sponsored by:\s*(.+)")
        .replace_all(&text, "\n\nSponsored by: ${1}\n\n");

    let text = regex!(r#"\s*href\s*=\s*["'][^"']*["']"#).replace_all(&text, "");
    let text = regex!(r"\n{2,}").replace_all(&text, "\n\n");
    let text = regex!(r"[ \t]+").replace_all(&text, " ");
    let text = regex!(r" *\n *").replace_all(&text, "\n");

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tag_remnants() {
        assert_eq!(clean_fragment("<p"), "");
        assert_eq!(clean_fragment("Event description</p"), "Event description");
        assert_eq!(clean_fragment("Join us for tea</span"), "Join us for tea");
    }

    #[test]
    fn keeps_meridiem_abbreviations() {
        assert_eq!(clean_fragment("Doors at 7 p.m. sharp"), "Doors at 7 p.m. sharp");
    }

    #[test]
    fn standalone_p_becomes_paragraph_break() {
        assert_eq!(clean_fragment("first p second"), "first\n\nsecond");
    }

    #[test]
    fn removes_entity_and_attribute_debris() {
        assert_eq!(clean_fragment("before&amp;nbsp;after"), "before&amp;after");
        assert_eq!(
            clean_fragment(r#"<a href="https://example.com" Register here</a"#),
            "Register here"
        );
    }

    #[test]
    fn list_tokens_become_bullets() {
        assert_eq!(clean_fragment("ul li Snacks"), "\u{2022} Snacks");
    }

    #[test]
    fn sponsor_line_is_isolated() {
        assert_eq!(
            clean_fragment("Open to all. Sponsored by: The History Department"),
            "Open to all.\n\nSponsored by: The History Department"
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(clean_fragment("too   many\t spaces"), "too many spaces");
        assert_eq!(clean_fragment("one \n\n\n two"), "one\n\ntwo");
    }

    #[test]
    fn idempotent_on_clean_text() {
        let cleaned = clean_fragment("Coffee hour in the lounge.\n\nAll welcome.");
        assert_eq!(clean_fragment(&cleaned), cleaned);
    }
}
