/// Pad `text` so it sits in the middle of `width` columns
pub fn center_text(text: &str, width: usize) -> String {
    let text_len = text.chars().count();
    if text_len >= width {
        return text.chars().take(width).collect();
    }
    let padding = (width - text_len) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

/// Greedy word wrap on whitespace
pub fn word_wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_text_pads_left() {
        assert_eq!(center_text("ab", 6), "  ab");
        assert_eq!(center_text("abcdef", 3), "abc");
    }

    #[test]
    fn test_word_wrap_respects_width() {
        let lines = word_wrap("Ayo bantu merapikan kelas kita", 10);
        assert_eq!(lines, vec!["Ayo bantu", "merapikan", "kelas kita"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }
}
