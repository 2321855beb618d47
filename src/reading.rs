// Reading time estimation

/// Average adult reading speed used for the estimate
pub const WORDS_PER_MINUTE: usize = 200;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes needed to read `text`, rounded up. Never less than one minute.
pub fn reading_minutes(text: &str) -> usize {
    word_count(text).div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Human-readable reading time, e.g. `"5 min read"`
pub fn format_reading_time(minutes: usize) -> String {
    format!("{minutes} min read")
}

pub fn estimate_reading_time(text: &str) -> String {
    format_reading_time(reading_minutes(text))
}
