//! Segmentación del texto en palabras candidatas

use crate::filters;

/// Delimitadores fijos de separación de palabras.
pub const DELIMITERS: &[char] = &[' ', '"', ':', '.', ',', ';', '!', '?', '#'];

/// Divide el texto por los delimitadores y conserva solo los tokens que
/// merecen analizarse: no vacíos, de más de un carácter y sin `@` en
/// ninguna posición (las menciones no son candidatas).
pub fn worthwhile_words_from_text(text: &str) -> Vec<&str> {
    text.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .filter(|token| filters::is_worth_checking(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_delimiters() {
        let words = worthwhile_words_from_text("cats, dogs; birds! fish? #pets \"quoted\": end.");
        assert_eq!(
            words,
            vec!["cats", "dogs", "birds", "fish", "pets", "quoted", "end"]
        );
    }

    #[test]
    fn test_drops_empty_and_short_tokens() {
        // Las secuencias de delimitadores producen tokens vacíos que se descartan
        let words = worthwhile_words_from_text("a.. b!!  tree");
        assert_eq!(words, vec!["tree"]);
    }

    #[test]
    fn test_drops_mentions() {
        let words = worthwhile_words_from_text("ping @dan about the launch");
        assert_eq!(words, vec!["ping", "about", "the", "launch"]);
    }

    #[test]
    fn test_drops_tokens_with_inner_at() {
        // El rechazo aplica a `@` en cualquier posición, no solo como prefijo
        let words = worthwhile_words_from_text("mail me dan@example lunes");
        assert_eq!(words, vec!["mail", "me", "lunes"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(worthwhile_words_from_text("").is_empty());
        assert!(worthwhile_words_from_text(" .,;! ").is_empty());
    }
}
