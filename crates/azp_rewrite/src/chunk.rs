/// Splits text into word-bounded chunks of at most `max_words` words.
///
/// Long articles are paraphrased one chunk at a time to stay within the
/// model's context budget; word boundaries keep sentences readable even
/// when a split lands mid-paragraph.
pub fn split_into_chunks(text: &str, max_words: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }
    words
        .chunks(max_words.max(1))
        .map(|c| c.join(" "))
        .collect()
}
