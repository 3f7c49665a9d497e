//! Word-by-word alignment of fresh tokens against the reference text.
//!
//! The engine walks a cursor over the reference structure, marking each word
//! correct or incorrect as tokens arrive, and holds position ("frozen") after
//! a mistake until the reader repeats the expected word.

use crate::text::{ReferenceText, WordStatus};

/// Position of the next expected word, plus the error-recovery flag.
///
/// Invariant: `(paragraph, word)` points at the first word whose status is
/// not `Correct`, or one-past-the-end when the page is complete. `frozen` is
/// true exactly while the pointed-at word is `Incorrect` and has not yet been
/// repeated correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub paragraph: usize,
    pub word: usize,
    pub frozen: bool,
}

impl Cursor {
    /// Cursor at the start of a freshly loaded page.
    pub fn initial() -> Self {
        Self {
            paragraph: 0,
            word: 0,
            frozen: false,
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::initial()
    }
}

/// Align a batch of fresh tokens against the reference, advancing the cursor.
///
/// Each token advances the cursor by at most one word or leaves it in place:
///
/// 1. Skip forward over `Correct` words (wrapping to the next paragraph);
///    walking past the last paragraph means the page is already complete and
///    the remaining tokens are no-ops.
/// 2. Frozen: a matching token marks the word `Correct`, advances, and
///    unfreezes; a mismatch changes nothing. Either way the rest of the
///    batch is dropped: one correction attempt per batch.
/// 3. Not frozen: a match marks `Correct` and advances; a mismatch marks
///    `Incorrect`, freezes, and drops the rest of the batch.
///
/// Once an error is detected or a correction attempted, later tokens in the
/// same utterance are mis-windowed relative to the reference (the reader is
/// repeating), so comparing them would cascade false mismatches.
///
/// An empty token batch is a no-op.
pub fn align(reference: &mut ReferenceText, cursor: &mut Cursor, tokens: &[String]) {
    for token in tokens {
        if !advance_to_pending(reference, cursor) {
            // Page already complete; nothing left to compare against.
            break;
        }

        let target = match reference.word_mut(cursor.paragraph, cursor.word) {
            Some(w) => w,
            None => break,
        };

        if cursor.frozen {
            if *token == target.normalized {
                target.status = WordStatus::Correct;
                cursor.word += 1;
                cursor.frozen = false;
            }
            break;
        }

        if *token == target.normalized {
            target.status = WordStatus::Correct;
            cursor.word += 1;
        } else {
            target.status = WordStatus::Incorrect;
            cursor.frozen = true;
            break;
        }
    }
}

/// Move the cursor to the first non-`Correct` word at or after its position.
///
/// Returns false when the walk runs past the last paragraph (page complete).
fn advance_to_pending(reference: &ReferenceText, cursor: &mut Cursor) -> bool {
    while cursor.paragraph < reference.paragraph_count() {
        if cursor.word >= reference.paragraph_len(cursor.paragraph) {
            cursor.paragraph += 1;
            cursor.word = 0;
            continue;
        }
        match reference.word(cursor.paragraph, cursor.word) {
            Some(w) if w.status == WordStatus::Correct => {
                cursor.word += 1;
            }
            _ => return true,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn statuses(reference: &ReferenceText, paragraph: usize) -> Vec<WordStatus> {
        reference.paragraphs()[paragraph]
            .iter()
            .map(|w| w.status)
            .collect()
    }

    #[test]
    fn test_exact_read_completes_page() {
        // Feed the whole paragraph in one call.
        let mut reference = ReferenceText::build("the cat sat");
        let mut cursor = Cursor::initial();

        align(&mut reference, &mut cursor, &toks(&["the", "cat", "sat"]));

        assert_eq!(
            statuses(&reference, 0),
            vec![WordStatus::Correct; 3],
        );
        assert_eq!(cursor, Cursor { paragraph: 0, word: 3, frozen: false });
        assert!(reference.is_complete());
    }

    #[test]
    fn test_mismatch_freezes_at_word() {
        // "the dog" against "the cat sat".
        let mut reference = ReferenceText::build("the cat sat");
        let mut cursor = Cursor::initial();

        align(&mut reference, &mut cursor, &toks(&["the", "dog"]));

        assert_eq!(
            statuses(&reference, 0),
            vec![WordStatus::Correct, WordStatus::Incorrect, WordStatus::Pending],
        );
        assert_eq!(cursor, Cursor { paragraph: 0, word: 1, frozen: true });
    }

    #[test]
    fn test_frozen_mismatch_leaves_state_unchanged() {
        // Repeating the wrong word while frozen changes nothing.
        let mut reference = ReferenceText::build("the cat sat");
        let mut cursor = Cursor::initial();
        align(&mut reference, &mut cursor, &toks(&["the", "dog"]));

        align(&mut reference, &mut cursor, &toks(&["dog"]));

        assert_eq!(
            statuses(&reference, 0),
            vec![WordStatus::Correct, WordStatus::Incorrect, WordStatus::Pending],
        );
        assert_eq!(cursor, Cursor { paragraph: 0, word: 1, frozen: true });
    }

    #[test]
    fn test_unfreeze_consumes_only_one_token() {
        // The correction batch ["cat", "sat"] unfreezes on "cat" but
        // drops "sat"; a later batch finishes the page.
        let mut reference = ReferenceText::build("the cat sat");
        let mut cursor = Cursor::initial();
        align(&mut reference, &mut cursor, &toks(&["the", "dog"]));

        align(&mut reference, &mut cursor, &toks(&["cat", "sat"]));
        assert_eq!(cursor, Cursor { paragraph: 0, word: 2, frozen: false });
        assert_eq!(
            statuses(&reference, 0),
            vec![WordStatus::Correct, WordStatus::Correct, WordStatus::Pending],
        );
        assert!(!reference.is_complete());

        align(&mut reference, &mut cursor, &toks(&["sat"]));
        assert!(reference.is_complete());
        assert_eq!(cursor, Cursor { paragraph: 0, word: 3, frozen: false });
    }

    #[test]
    fn test_mismatch_drops_rest_of_batch() {
        let mut reference = ReferenceText::build("one two three");
        let mut cursor = Cursor::initial();

        // "three" after the mismatch must not be compared.
        align(&mut reference, &mut cursor, &toks(&["oops", "three"]));

        assert_eq!(
            statuses(&reference, 0),
            vec![WordStatus::Incorrect, WordStatus::Pending, WordStatus::Pending],
        );
        assert_eq!(cursor, Cursor { paragraph: 0, word: 0, frozen: true });
    }

    #[test]
    fn test_cursor_wraps_to_next_paragraph() {
        let mut reference = ReferenceText::build("one two\n\nthree four");
        let mut cursor = Cursor::initial();

        align(&mut reference, &mut cursor, &toks(&["one", "two", "three"]));

        assert_eq!(cursor, Cursor { paragraph: 1, word: 1, frozen: false });
        assert_eq!(statuses(&reference, 1)[0], WordStatus::Correct);
    }

    #[test]
    fn test_tokens_past_completion_are_noops() {
        let mut reference = ReferenceText::build("hi");
        let mut cursor = Cursor::initial();

        align(&mut reference, &mut cursor, &toks(&["hi", "there", "again"]));

        assert!(reference.is_complete());
        assert_eq!(cursor, Cursor { paragraph: 1, word: 0, frozen: false });

        // Further calls on a complete page change nothing.
        let before = reference.clone();
        align(&mut reference, &mut cursor, &toks(&["more"]));
        assert_eq!(reference, before);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut reference = ReferenceText::build("word");
        let mut cursor = Cursor::initial();
        align(&mut reference, &mut cursor, &[]);
        assert_eq!(cursor, Cursor::initial());
        assert_eq!(statuses(&reference, 0), vec![WordStatus::Pending]);
    }

    #[test]
    fn test_empty_reference_never_loops() {
        let mut reference = ReferenceText::build("");
        let mut cursor = Cursor::initial();
        align(&mut reference, &mut cursor, &toks(&["anything"]));
        assert!(reference.is_complete());
        assert_eq!(cursor, Cursor::initial());
    }

    #[test]
    fn test_correct_status_is_monotonic() {
        // Once Correct, a word never changes on later calls.
        let mut reference = ReferenceText::build("a b c");
        let mut cursor = Cursor::initial();
        align(&mut reference, &mut cursor, &toks(&["a"]));
        assert_eq!(statuses(&reference, 0)[0], WordStatus::Correct);

        for batch in [toks(&["wrong"]), toks(&["b"]), toks(&["nope", "c"])] {
            align(&mut reference, &mut cursor, &batch);
            assert_eq!(statuses(&reference, 0)[0], WordStatus::Correct);
        }
    }

    #[test]
    fn test_freeze_exclusivity() {
        // While frozen, exactly the cursor word is Incorrect.
        let mut reference = ReferenceText::build("the cat sat");
        let mut cursor = Cursor::initial();
        align(&mut reference, &mut cursor, &toks(&["the", "dog"]));
        assert!(cursor.frozen);

        let incorrect: Vec<(usize, usize)> = reference
            .paragraphs()
            .iter()
            .enumerate()
            .flat_map(|(p, par)| {
                par.iter()
                    .enumerate()
                    .filter(|(_, w)| w.status == WordStatus::Incorrect)
                    .map(move |(i, _)| (p, i))
            })
            .collect();
        assert_eq!(incorrect, vec![(cursor.paragraph, cursor.word)]);
    }

    #[test]
    fn test_incorrect_word_becomes_correct_after_repeat() {
        let mut reference = ReferenceText::build("the cat");
        let mut cursor = Cursor::initial();
        align(&mut reference, &mut cursor, &toks(&["the", "dog"]));
        align(&mut reference, &mut cursor, &toks(&["cat"]));

        assert_eq!(
            statuses(&reference, 0),
            vec![WordStatus::Correct, WordStatus::Correct],
        );
        assert!(reference.is_complete());
        assert!(!cursor.frozen);
    }

    #[test]
    fn test_completion_across_multiple_calls() {
        let mut reference = ReferenceText::build("a b\n\nc");
        let mut cursor = Cursor::initial();
        for token in ["a", "b", "c"] {
            assert!(!reference.is_complete());
            align(&mut reference, &mut cursor, &toks(&[token]));
        }
        assert!(reference.is_complete());
    }
}
