//! Case-insensitive whole-word scanning over segment text.
//!
//! Roster names and skill tokens arrive at run time, so they are matched
//! with these byte-offset scanners instead of compiled patterns. Transcripts
//! are English per the input contract; matching is ASCII case-insensitive so
//! byte offsets into the original text stay valid. Non-ASCII letters are
//! compared exactly — case folding never goes beyond ASCII.

/// Find the first whole-word occurrence of `needle` in `haystack`,
/// case-insensitively. Returns the byte span in `haystack`.
///
/// "Whole word" means the characters adjacent to the match are not
/// alphanumeric, so "api" does not hit inside "rapid". Multi-word needles
/// ("need to") are supported; internal punctuation ("you're") is fine.
pub fn find_word(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    find_impl(haystack, needle, true)
}

/// Like [`find_word`], but only the *leading* edge must sit on a word
/// boundary: "urgent" hits inside "urgently" but not inside "insurgent".
pub fn find_word_prefix(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    find_impl(haystack, needle, false)
}

/// True if `needle` occurs as a whole word in `haystack`.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    find_word(haystack, needle).is_some()
}

fn find_impl(haystack: &str, needle: &str, bound_end: bool) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let hay = haystack.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();

    let mut from = 0;
    while let Some(pos) = hay[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();

        let before_ok = hay[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = !bound_end
            || hay[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());

        if before_ok && after_ok {
            return Some((start, end));
        }
        // Resume on the next char boundary; a bare +1 would land inside a
        // multi-byte first character and make the slice above panic.
        from = start + hay[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Lowercase alphanumeric word tokens of `text`, in order.
pub fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
        .collect()
}
