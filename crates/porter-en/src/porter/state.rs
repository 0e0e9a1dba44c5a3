// Mutable scan state shared by the rule pipeline
//
// Positions are half-open. The active region is `buf[start..end]` and
// `cursor` is the exclusive end of the stem in front of the last matched
// suffix, so a suffix covering the whole region leaves `cursor == start`.

use porter_core::character::is_fixed_vowel;

/// Per-call state of one stemming run.
///
/// Created from a lowercased word, mutated in place by the pipeline steps and
/// discarded once the stem has been extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemmingState {
    buf: Vec<char>,
    start: usize,
    end: usize,
    cursor: usize,
}

impl StemmingState {
    /// Create a state whose active region covers the whole buffer.
    pub fn new(buf: Vec<char>) -> Self {
        let end = buf.len();
        Self {
            buf,
            start: 0,
            end,
            cursor: 0,
        }
    }

    /// The current active region.
    pub fn region(&self) -> &[char] {
        &self.buf[self.start..self.end]
    }

    /// Number of characters in the active region.
    pub fn region_len(&self) -> usize {
        self.end - self.start
    }

    /// Exclusive end of the stem in front of the last matched suffix.
    ///
    /// Only meaningful right after the operation that set it.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the stem in front of the cursor.
    pub fn stem_len(&self) -> usize {
        self.cursor - self.start
    }

    /// Consume the state and return the active region.
    pub fn into_region(mut self) -> Vec<char> {
        self.buf.truncate(self.end);
        self.buf.drain(..self.start);
        self.buf
    }

    // -----------------------------------------------------------------------
    // Predicates
    // -----------------------------------------------------------------------

    /// True if `buf[i]` is a consonant.
    ///
    /// `y` is a consonant at the start of the region or after a vowel, and a
    /// vowel after a consonant. A run of `y`s therefore alternates, starting
    /// from the letter in front of the run.
    pub fn is_consonant(&self, i: usize) -> bool {
        let c = self.buf[i];
        if c != 'y' {
            return !is_fixed_vowel(c);
        }
        let mut first = i;
        while first > self.start && self.buf[first - 1] == 'y' {
            first -= 1;
        }
        let first_is_consonant = first == self.start || is_fixed_vowel(self.buf[first - 1]);
        first_is_consonant == ((i - first) % 2 == 0)
    }

    /// Consonant flags for `buf[start..end]`, computed in one forward pass.
    fn consonant_flags(&self, end: usize) -> impl Iterator<Item = bool> + '_ {
        (self.start..end).scan(false, move |prev, i| {
            let c = self.buf[i];
            let consonant = if c == 'y' {
                i == self.start || !*prev
            } else {
                !is_fixed_vowel(c)
            };
            *prev = consonant;
            Some(consonant)
        })
    }

    /// True if the stem in front of the cursor contains a vowel.
    pub fn has_vowel_in_stem(&self) -> bool {
        self.consonant_flags(self.cursor).any(|c| !c)
    }

    /// True if `buf[i - 1..=i]` is a doubled consonant.
    pub fn is_double_consonant(&self, i: usize) -> bool {
        i > self.start && self.buf[i] == self.buf[i - 1] && self.is_consonant(i)
    }

    /// True if `buf[i - 2..=i]` is consonant-vowel-consonant and the last
    /// consonant is not `w`, `x` or `y` ("hop", "cav" but not "snow", "box").
    ///
    /// At `i == 1` a two-letter vowel-consonant word start also qualifies.
    pub fn is_cvc(&self, i: usize) -> bool {
        match i {
            0 => false,
            1 => !self.is_consonant(0) && self.is_consonant(1),
            _ => {
                self.is_consonant(i)
                    && !self.is_consonant(i - 1)
                    && self.is_consonant(i - 2)
                    && !matches!(self.buf[i], 'w' | 'x' | 'y')
            }
        }
    }

    /// Number of vowel-run/consonant-run pairs in the stem before the cursor.
    ///
    /// ```text
    /// <c><v>       gives 0
    /// <c>vc<v>     gives 1
    /// <c>vcvc<v>   gives 2
    /// ```
    pub fn measure(&self) -> usize {
        let mut flags = self.consonant_flags(self.cursor).peekable();
        let mut n = 0;

        // Optional leading consonants.
        while flags.next_if(|&c| c).is_some() {}
        loop {
            while flags.next_if(|&c| !c).is_some() {}
            if flags.peek().is_none() {
                return n;
            }
            while flags.next_if(|&c| c).is_some() {}
            n += 1;
        }
    }

    /// Last character of the active region.
    pub(crate) fn last(&self) -> Option<char> {
        self.nth_from_end(0)
    }

    /// Character `n` places from the end of the active region (0 is the last).
    pub(crate) fn nth_from_end(&self, n: usize) -> Option<char> {
        let i = self.end.checked_sub(n + 1)?;
        (i >= self.start).then(|| self.buf[i])
    }

    /// True if the region ends in a doubled consonant.
    pub(crate) fn ends_in_double_consonant(&self) -> bool {
        self.end > self.start && self.is_double_consonant(self.end - 1)
    }

    /// True if the character `n` places from the end closes a CVC pattern.
    pub(crate) fn is_cvc_from_end(&self, n: usize) -> bool {
        self.end.checked_sub(n + 1).is_some_and(|i| self.is_cvc(i))
    }

    /// Character just in front of the cursor.
    pub(crate) fn before_cursor(&self) -> Option<char> {
        (self.cursor > self.start).then(|| self.buf[self.cursor - 1])
    }

    // -----------------------------------------------------------------------
    // Suffix matching and rewriting
    // -----------------------------------------------------------------------

    /// True if the active region ends with `suffix`.
    ///
    /// On success the cursor is moved to the start of the suffix. A failed
    /// match leaves the cursor untouched.
    pub fn ends_with(&mut self, suffix: &str) -> bool {
        let n = suffix.chars().count();
        if n > self.region_len() {
            return false;
        }
        let tail = &self.buf[self.end - n..self.end];
        if !tail.iter().copied().eq(suffix.chars()) {
            return false;
        }
        self.cursor = self.end - n;
        true
    }

    /// Replace everything after the cursor with `replacement`.
    pub fn replace_tail(&mut self, replacement: &str) {
        self.buf.truncate(self.cursor);
        self.buf.extend(replacement.chars());
        self.end = self.buf.len();
    }

    /// Replace the tail only if the stem before the cursor has `measure() > 0`.
    pub fn replace_if_measured(&mut self, replacement: &str) {
        if self.measure() > 0 {
            self.replace_tail(replacement);
        }
    }

    /// Shrink the region by `n` characters.
    pub(crate) fn drop_last(&mut self, n: usize) {
        self.end -= n;
    }

    /// Grow the region back by one character still present in the buffer.
    pub(crate) fn restore_last(&mut self) {
        self.end += 1;
    }

    /// Cut the region at the cursor.
    pub(crate) fn truncate_to_cursor(&mut self) {
        self.end = self.cursor;
    }

    /// Move the cursor to the end of the region.
    pub(crate) fn cursor_to_end(&mut self) {
        self.cursor = self.end;
    }

    /// Move the cursor one character to the right.
    pub(crate) fn advance_cursor(&mut self) {
        self.cursor += 1;
    }

    /// Overwrite the last character of the region.
    pub(crate) fn set_last(&mut self, c: char) {
        self.buf[self.end - 1] = c;
    }
}
