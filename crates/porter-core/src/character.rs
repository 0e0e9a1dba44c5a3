// Character classification for English suffix stripping

/// English vowel letters. `y` is positional and handled by the stemmer.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Returns true if `c` is one of the fixed vowels `a e i o u`.
///
/// Only lowercase ASCII letters are recognized; anything else (including
/// digits, punctuation and non-ASCII letters) counts as a non-vowel.
#[inline]
pub fn is_fixed_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Lowercase a word into a character buffer.
///
/// Only ASCII letters are folded. Other characters are copied unchanged.
pub fn ascii_lower_chars(word: &str) -> Vec<char> {
    word.chars().map(|c| c.to_ascii_lowercase()).collect()
}
