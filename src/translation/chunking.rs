/*!
 * Fixed-size text chunking for size-limited translation requests.
 */

/// Split `text` into contiguous chunks of at most `max_chars` characters
///
/// Lengths are counted in Unicode scalar values, so a chunk never ends
/// inside a character. Concatenating the chunks yields `text` again.
/// Empty input gives no chunks.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (index, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..index]);
            start = index;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}
