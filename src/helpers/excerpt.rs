//! Excerpt helpers - plain-text summaries of rendered content

/// Strip HTML tags from content
pub fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                if in_tag {
                    in_tag = false;
                    // Tag boundaries separate words in the source
                    if !result.ends_with(char::is_whitespace) && !result.is_empty() {
                        result.push(' ');
                    }
                }
            }
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    collapse_whitespace(&result)
}

/// Prune plain text to at most `max_length` characters, cutting at a word
/// boundary and appending an ellipsis when anything was dropped.
///
/// The ellipsis counts toward the limit.
pub fn prune(text: &str, max_length: usize) -> String {
    let max_length = max_length.max(1);
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_length {
        return text.trim().to_string();
    }

    let cut: String = chars[..max_length - 1].iter().collect();
    let pruned = match cut.rfind(char::is_whitespace) {
        Some(pos) => cut[..pos].trim_end(),
        None => cut.trim_end(),
    };

    format!("{}…", pruned)
}

fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_space = true;

    for c in s.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
            }
            last_was_space = true;
        } else {
            result.push(c);
            last_was_space = false;
        }
    }

    result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <em>world</em></p>"), "Hello world");
    }

    #[test]
    fn test_strip_html_collapses_whitespace() {
        assert_eq!(strip_html("<h1>A</h1>\n\n<p>B</p>"), "A B");
    }

    #[test]
    fn test_prune_short_text_untouched() {
        assert_eq!(prune("short text", 250), "short text");
    }

    #[test]
    fn test_prune_cuts_at_word_boundary() {
        let text = "alpha beta gamma delta";
        let pruned = prune(text, 12);
        assert_eq!(pruned, "alpha beta…");
    }

    #[test]
    fn test_prune_stays_within_limit() {
        let word = "word ";
        let text = word.repeat(100);
        let pruned = prune(&text, 250);
        assert!(pruned.chars().count() <= 250);
        assert!(pruned.ends_with('…'));
    }

    #[test]
    fn test_prune_unbroken_text() {
        let text = "x".repeat(300);
        let pruned = prune(&text, 250);
        assert_eq!(pruned.chars().count(), 250);
        assert!(pruned.ends_with('…'));
    }
}
