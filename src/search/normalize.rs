use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block, dropped after decomposition.
#[inline]
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Normalize text for matching: NFD-decompose, strip combining diacritics,
/// lowercase. Idempotent, so already-normalized keys pass through unchanged.
///
/// Matching-only; display text is never normalized.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|&c| !is_combining_diacritic(c)).collect();
    stripped.to_lowercase()
}
