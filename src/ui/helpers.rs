//! UI helper functions

use ratatui::layout::Rect;

/// Simple word wrapping helper (widths counted in chars)
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current_line.chars().count();
        if word_len > max_width {
            // Hard-break words (URLs, paths) that can never fit on one line
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(max_width).peekable();
            while let Some(chunk) = chunks.next() {
                let piece: String = chunk.iter().collect();
                if chunks.peek().is_some() {
                    lines.push(piece);
                } else {
                    current_line = piece;
                }
            }
        } else if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_len + 1 + word_len <= max_width {
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

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Cut `text` to `max_width` chars, ending in "..." when shortened
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }
    let kept: String = text.chars().take(max_width - 3).collect();
    format!("{}...", kept)
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello world", 0), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        assert_eq!(
            wrap_text("hello world foo bar", 10),
            vec!["hello", "world foo", "bar"]
        );
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        assert_eq!(wrap_text("diseño página", 13), vec!["diseño página"]);
    }

    #[test]
    fn test_wrap_text_breaks_long_words() {
        assert_eq!(
            wrap_text("see https://files.example.com/x ok", 10),
            vec!["see", "https://fi", "les.exampl", "e.com/x ok"]
        );
        for line in wrap_text("ñññññññññññññ", 5) {
            assert!(line.chars().count() <= 5);
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long deliverable name", 10), "a long ...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 20, area), Rect::new(20, 10, 60, 20));
        assert_eq!(centered_rect(200, 80, area), area);
    }
}
