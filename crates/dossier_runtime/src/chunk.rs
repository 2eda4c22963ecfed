//! Structure-aware text bounding.
//!
//! [`TextSplitter`] cuts text into chunks of at most `chunk_size` characters
//! with zero overlap, preferring larger structural boundaries: paragraph
//! breaks, then line breaks, then sentence breaks, then word breaks, and
//! only as a last resort arbitrary character positions (always on a char
//! boundary). [`TextSplitter::bound`] keeps the first chunk and discards the
//! rest: truncation, not summarization.

/// Separator preference, largest structure first. The empty fallback is the
/// forced per-character split.
const SEPARATORS: [&str; 4] = ["\n\n", "\n", ". ", " "];

#[derive(Debug, Clone)]
pub struct TextSplitter {
    chunk_size: usize,
}

impl TextSplitter {
    pub const DEFAULT_CHUNK_SIZE: usize = 16_000;

    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Truncate `text` to the size budget. Within budget the text passes
    /// through verbatim; over budget only the first chunk survives.
    pub fn bound(&self, text: &str) -> String {
        if char_len(text) <= self.chunk_size {
            return text.to_string();
        }
        let bounded = self.split(text).into_iter().next().unwrap_or_default();
        tracing::debug!(
            original_chars = char_len(text),
            bounded_chars = char_len(&bounded),
            "text bounded"
        );
        bounded
    }

    /// Split into chunks of at most `chunk_size` characters, no overlap.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.split_with(text, &SEPARATORS)
    }

    fn split_with(&self, text: &str, separators: &[&'static str]) -> Vec<String> {
        if char_len(text) <= self.chunk_size {
            return vec![text.to_string()];
        }
        match separators.split_first() {
            Some((sep, rest)) => {
                if text.contains(sep) {
                    self.merge_parts(text.split(sep).collect(), sep, rest)
                } else {
                    self.split_with(text, rest)
                }
            }
            None => split_chars(text, self.chunk_size),
        }
    }

    /// Greedily pack split parts back into chunks, re-joined with their
    /// separator. A part that alone exceeds the budget recurses into the
    /// finer separators.
    fn merge_parts(
        &self,
        parts: Vec<&str>,
        sep: &'static str,
        rest: &[&'static str],
    ) -> Vec<String> {
        let sep_len = sep.chars().count();
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for part in parts {
            let part_len = char_len(part);

            if part_len > self.chunk_size {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                chunks.extend(self.split_with(part, rest));
                continue;
            }

            let extra = if current.is_empty() {
                part_len
            } else {
                part_len + sep_len
            };
            if !current.is_empty() && current_len + extra > self.chunk_size {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if !current.is_empty() {
                current.push_str(sep);
                current_len += sep_len;
            }
            current.push_str(part);
            current_len += part_len;
        }

        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHUNK_SIZE)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn split_chars(text: &str, size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;
    for ch in text.chars() {
        if count == size {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_budget_is_identity() {
        let splitter = TextSplitter::default();
        let text = "short text\n\nwith paragraphs";
        assert_eq!(splitter.bound(text), text);
    }

    #[test]
    fn test_exactly_at_budget_is_identity() {
        let splitter = TextSplitter::new(5);
        assert_eq!(splitter.bound("abcde"), "abcde");
    }

    #[test]
    fn test_bound_respects_budget() {
        let splitter = TextSplitter::new(16_000);
        let text = "word ".repeat(5_000); // 25000 chars
        let bounded = splitter.bound(&text);
        assert!(bounded.chars().count() <= 16_000);
    }

    #[test]
    fn test_paragraph_boundary_preferred() {
        let splitter = TextSplitter::new(30);
        let text = "first paragraph here\n\nsecond paragraph that follows";
        assert_eq!(splitter.bound(text), "first paragraph here");
    }

    #[test]
    fn test_sentence_boundary_when_no_paragraphs() {
        let splitter = TextSplitter::new(30);
        let text = "One short sentence. Another sentence follows it. And more.";
        assert_eq!(splitter.bound(text), "One short sentence");
    }

    #[test]
    fn test_no_mid_word_split_when_avoidable() {
        let splitter = TextSplitter::new(12);
        let bounded = splitter.bound("alpha beta gamma delta");
        assert_eq!(bounded, "alpha beta");
    }

    #[test]
    fn test_char_fallback_for_unbroken_text() {
        let splitter = TextSplitter::new(8);
        let bounded = splitter.bound("abcdefghijklmnop");
        assert_eq!(bounded, "abcdefgh");
    }

    #[test]
    fn test_char_fallback_is_utf8_safe() {
        let splitter = TextSplitter::new(4);
        let bounded = splitter.bound("ééééééééé");
        assert_eq!(bounded, "éééé");
    }

    #[test]
    fn test_bound_is_idempotent() {
        let splitter = TextSplitter::new(25);
        let text = "Some sentences here. More text follows. And yet more after that.";
        let once = splitter.bound(text);
        assert_eq!(splitter.bound(&once), once);
    }

    #[test]
    fn test_split_covers_long_parts() {
        let splitter = TextSplitter::new(10);
        let chunks = splitter.split("abcdefghijklmnopqrstuvwxyz\n\nshort");
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
        assert!(chunks.concat().contains("short"));
    }

    #[test]
    fn test_zero_overlap() {
        let splitter = TextSplitter::new(12);
        let text = "aaa bbb ccc ddd eee fff";
        let chunks = splitter.split(text);
        // Rebuilding with the dropped boundary separators restores the input.
        assert_eq!(chunks.join(" "), text);
    }
}
