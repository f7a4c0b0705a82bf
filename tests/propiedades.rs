//! Propiedades universales de la detección de emoji y la deduplicación.
//!
//! Ejecutar solo estos tests:  cargo test --test propiedades

use proptest::prelude::*;

use extractor::emoji::{emoji_from_text, is_emoji_surrogate_pair, remove_emoji};
use extractor::filters::dedup_preserving_order;

proptest! {
    /// Todo tramo devuelto por `emoji_from_text` supera la comprobación de
    /// par subrogado con sus propias dos unidades de código.
    #[test]
    fn emoji_spans_satisfy_surrogate_check(text in "\\PC*") {
        for span in emoji_from_text(&text) {
            let units: Vec<u16> = span.encode_utf16().collect();
            prop_assert_eq!(units.len(), 2);
            prop_assert!(is_emoji_surrogate_pair(units[0], units[1]));
        }
    }

    /// Tras eliminar los emoji detectados, el texto restante no contiene
    /// ninguno de ellos.
    #[test]
    fn removed_emoji_do_not_reappear(text in "\\PC*") {
        let found = emoji_from_text(&text);
        let cleaned = remove_emoji(&text, &found);
        for span in &found {
            prop_assert!(!cleaned.contains(span.as_str()));
        }
    }

    /// La deduplicación conserva los elementos sin repetir y en el orden de
    /// su primera aparición.
    #[test]
    fn dedup_keeps_first_occurrence_order(
        words in proptest::collection::vec("[a-c]{1,2}", 0..24)
    ) {
        let deduped = dedup_preserving_order(words.clone());

        let mut expected: Vec<String> = Vec::new();
        for word in &words {
            if !expected.contains(word) {
                expected.push(word.clone());
            }
        }
        prop_assert_eq!(deduped, expected);
    }
}
