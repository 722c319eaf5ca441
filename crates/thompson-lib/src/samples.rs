//! Ready-made patterns to try.

/// Suggested patterns. `+` is an ordinary literal in this dialect.
pub const SAMPLE_PATTERNS: [&str; 4] = ["(a|b)*abb", "a*b*c*", "(0|1)+", "start(middle)*end"];

/// The suggestions as one spoken-style sentence.
pub fn samples_narration() -> String {
    format!(
        "Hello! Here are some suggestions for you to try. Try: {}",
        SAMPLE_PATTERNS.join(". Or else: ")
    )
}

/// The suggestions as a listing, one pattern per line.
pub fn samples_listing() -> String {
    format!("Try one of these:\n\n{}", SAMPLE_PATTERNS.join("\n"))
}
