/// Break points, in the order they are tried
const BREAK_POINTS: [&str; 3] = ["\n\n", "\n", " "];

/// Splits text into provider-sized chunks, preferring paragraph breaks, then
/// line breaks, then spaces.
///
/// A break point is only accepted when it falls in the latter half of the
/// window (at or after `max_len / 2`); otherwise the chunk is hard-cut at
/// exactly `max_len` characters. Lengths are counted in chars. Every chunk is
/// trimmed and non-empty, and none is longer than `max_len`.
#[derive(Debug, Clone)]
pub struct TextChunker<'a> {
    remaining: &'a str,
    max_len: usize,
}

impl<'a> TextChunker<'a> {
    pub fn new(text: &'a str, max_len: usize) -> Self {
        Self {
            remaining: text.trim(),
            max_len: max_len.max(1),
        }
    }

    /// Char position of the chunk boundary for the current remainder
    fn cut_position(&self) -> usize {
        let min_cut = self.max_len / 2;

        for separator in BREAK_POINTS {
            if let Some(position) = last_break_at_or_before(self.remaining, separator, self.max_len) {
                if position >= min_cut {
                    return position;
                }
            }
        }

        self.max_len
    }
}

impl<'a> Iterator for TextChunker<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.remaining.is_empty() {
            if self.remaining.chars().nth(self.max_len).is_none() {
                let last = self.remaining;
                self.remaining = "";
                return Some(last);
            }

            let cut = byte_offset(self.remaining, self.cut_position());
            let (head, tail) = self.remaining.split_at(cut);
            self.remaining = tail.trim();

            let part = head.trim();
            if !part.is_empty() {
                return Some(part);
            }
        }

        None
    }
}

/// Eagerly split `text` into owned chunks
pub fn split_text_into_chunks(text: &str, max_len: usize) -> Vec<String> {
    TextChunker::new(text, max_len).map(str::to_string).collect()
}

/// Char position of the last `separator` occurrence starting at or before
/// char position `max_len`
fn last_break_at_or_before(text: &str, separator: &str, max_len: usize) -> Option<usize> {
    let window_end = byte_offset(text, max_len + separator.chars().count());
    text[..window_end]
        .rfind(separator)
        .map(|byte_index| text[..byte_index].chars().count())
}

/// Byte offset of char position `chars`, clamped to the end of `text`
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}
