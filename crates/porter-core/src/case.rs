// Case restoration for lowercase stems
//
// The stemmer works on an ASCII-lowercased copy of the word. Restoration is
// a positional diff: wherever the stem still agrees with the lowercased
// original, the original (cased) character is put back.

/// Map a lowercase stem back onto the casing of `original`.
///
/// Walks indices `0..bound`, clamped to the stem length. At each index the
/// original character is emitted if its ASCII-lowercase form equals the
/// stem character; otherwise the stem character is emitted. Positions past
/// the end of `original` always take the stem character.
///
/// `bound` is the exclusive end of the region the caller wants restored.
/// After a pipeline run this is the stemmer's final boundary cursor, which
/// may lie past the stem's last character (the excess is ignored).
pub fn restore_case(original: &[char], stem: &[char], bound: usize) -> String {
    let end = bound.min(stem.len());
    stem[..end]
        .iter()
        .enumerate()
        .map(|(i, &s)| match original.get(i) {
            Some(&o) if o.to_ascii_lowercase() == s => o,
            _ => s,
        })
        .collect()
}
