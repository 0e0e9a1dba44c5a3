// The six suffix-stripping stages
//
// Each stage mutates the shared state in place. Dispatch order inside a
// stage matters: a failed match keeps the cursor of the last successful one,
// and the `alli` and `logi` rules have side effects on later matches.

use porter_core::Step;

use super::state::StemmingState;

/// Run a single pipeline stage.
pub fn apply(step: Step, st: &mut StemmingState) {
    match step {
        Step::Plurals => plurals(st),
        Step::TerminalY => terminal_y(st),
        Step::DoubleSuffixes => double_suffixes(st),
        Step::DerivationalSuffixes => derivational_suffixes(st),
        Step::SuffixRemoval => suffix_removal(st),
        Step::FinalCleanup => final_cleanup(st),
    }
}

/// Try `(suffix, replacement)` pairs in order and rewrite the first match
/// when the stem in front of it has a non-zero measure.
fn replace_first_match(st: &mut StemmingState, rules: &[(&str, &str)]) {
    for &(suffix, replacement) in rules {
        if st.ends_with(suffix) {
            st.replace_if_measured(replacement);
            return;
        }
    }
}

/// Plurals, `-ed` and `-ing`.
///
/// ```text
/// caresses -> caress    ponies -> poni    ties -> tie    cats -> cat
/// feed     -> feed      agreed -> agree   disabled -> disable
/// matting  -> mat       mating -> mate    meeting -> meet
/// milling  -> mill      messing -> mess   meetings -> meet
/// ```
fn plurals(st: &mut StemmingState) {
    if st.last() == Some('s') {
        if st.ends_with("sses") {
            st.drop_last(2);
        } else if st.ends_with("ies") {
            // "ties" -> "tie" but "flies" -> "fli"
            if st.stem_len() == 1 {
                st.drop_last(1);
            } else {
                st.drop_last(2);
            }
        } else if st.nth_from_end(1) != Some('s') {
            st.drop_last(1);
        }
    }

    if st.ends_with("ied") {
        // "died" -> "die" but "spied" -> "spi"
        if st.stem_len() == 1 {
            st.drop_last(1);
        } else {
            st.drop_last(2);
        }
    } else if st.ends_with("eed") {
        if st.measure() > 0 {
            st.drop_last(1);
        }
    } else if (st.ends_with("ed") || st.ends_with("ing")) && st.has_vowel_in_stem() {
        st.truncate_to_cursor();
        if st.ends_with("at") {
            st.replace_tail("ate");
        } else if st.ends_with("bl") {
            st.replace_tail("ble");
        } else if st.ends_with("iz") {
            st.replace_tail("ize");
        } else if st.ends_in_double_consonant() {
            st.drop_last(1);
            if matches!(st.last(), Some('l' | 's' | 'z')) {
                st.restore_last();
            }
        } else if st.measure() == 1 && st.is_cvc_from_end(0) {
            st.replace_tail("e");
        }
    }
}

/// Terminal `y` becomes `i` when it follows a consonant that is not the
/// whole stem: "happy" -> "happi", "spy" -> "spi", but "enjoy" stays.
fn terminal_y(st: &mut StemmingState) {
    if st.ends_with("y") && st.stem_len() > 1 && st.is_consonant(st.cursor() - 1) {
        st.set_last('i');
    }
}

/// Double suffixes map to single ones ("-ization" = "-ize" + "-ation").
fn double_suffixes(st: &mut StemmingState) {
    match st.nth_from_end(1) {
        Some('a') => replace_first_match(st, &[("ational", "ate"), ("tional", "tion")]),
        Some('c') => replace_first_match(st, &[("enci", "ence"), ("anci", "ance")]),
        Some('e') => replace_first_match(st, &[("izer", "ize")]),
        Some('l') => {
            if st.ends_with("bli") {
                st.replace_if_measured("ble");
            } else if st.ends_with("alli") {
                if st.measure() > 0 {
                    st.replace_tail("al");
                    double_suffixes(st);
                }
            } else {
                replace_first_match(
                    st,
                    &[("fulli", "ful"), ("entli", "ent"), ("eli", "e"), ("ousli", "ous")],
                );
            }
        }
        Some('o') => replace_first_match(
            st,
            &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
        ),
        Some('s') => replace_first_match(
            st,
            &[
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
            ],
        ),
        Some('t') => replace_first_match(
            st,
            &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
        ),
        Some('g') => logi_to_log(st),
        _ => {}
    }
}

/// `-logi` -> `-log`, keeping the l: "archaeologi" -> "archaeolog".
fn logi_to_log(st: &mut StemmingState) {
    if st.ends_with("logi") {
        st.advance_cursor();
        st.replace_if_measured("og");
    }
}

/// `-ic-`, `-full`, `-ness` and similar, dispatched on the final letter.
fn derivational_suffixes(st: &mut StemmingState) {
    match st.last() {
        Some('e') => replace_first_match(st, &[("icate", "ic"), ("ative", ""), ("alize", "al")]),
        Some('i') => replace_first_match(st, &[("iciti", "ic")]),
        Some('l') => replace_first_match(st, &[("ical", "ic"), ("ful", "")]),
        Some('s') => replace_first_match(st, &[("ness", "")]),
        _ => {}
    }
}

/// Strip `-ant`, `-ence` etc. when the remaining stem has `measure() > 1`.
fn suffix_removal(st: &mut StemmingState) {
    let matched = match st.nth_from_end(1) {
        Some('a') => st.ends_with("al"),
        Some('c') => st.ends_with("ance") || st.ends_with("ence"),
        Some('e') => st.ends_with("er"),
        Some('i') => st.ends_with("ic"),
        Some('l') => st.ends_with("able") || st.ends_with("ible"),
        Some('n') => {
            st.ends_with("ant")
                || st.ends_with("ement")
                || st.ends_with("ment")
                || st.ends_with("ent")
        }
        Some('o') => {
            (st.ends_with("ion") && matches!(st.before_cursor(), Some('s' | 't')))
                // takes care of -ous
                || st.ends_with("ou")
        }
        Some('s') => st.ends_with("ism"),
        Some('t') => st.ends_with("ate") || st.ends_with("iti"),
        Some('u') => st.ends_with("ous"),
        Some('v') => st.ends_with("ive"),
        Some('z') => st.ends_with("ize"),
        _ => false,
    };

    if matched && st.measure() > 1 {
        st.truncate_to_cursor();
    }
}

/// Drop a final `-e` in long stems and reduce `-ll` to `-l`.
fn final_cleanup(st: &mut StemmingState) {
    st.cursor_to_end();
    if st.last() == Some('e') {
        let m = st.measure();
        if m > 1 || (m == 1 && !st.is_cvc_from_end(1)) {
            st.drop_last(1);
        }
    }
    if st.last() == Some('l') && st.ends_in_double_consonant() && st.measure() > 1 {
        st.drop_last(1);
    }
}
