//! Colaboradores externos del extractor
//!
//! Define los contratos de los servicios que el pipeline consume como cajas
//! negras: el proveedor léxico, el canonicalizador de formas, el clasificador
//! de aceptabilidad y las dos fuentes de emoji. Las implementaciones reales
//! las inyecta el llamador; aquí solo viven variantes neutras de paso.

use serde::{Deserialize, Serialize};

use crate::emoji;

/// Error opaco de un colaborador. El pipeline lo propaga tal cual.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Respuesta por palabra de la consulta de categorías gramaticales.
///
/// Las respuestas van alineadas por posición con la lista consultada; la
/// secuencia puede ser más corta que la consulta, y cada entrada puede venir
/// inutilizable. Ninguno de esos casos es un error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartsOfSpeech {
    /// Lista ordenada de etiquetas devueltas por el proveedor
    Tags(Vec<String>),
    /// El proveedor no conocía la palabra
    Missing,
    /// Entrada con forma inesperada; se trata como "no es sustantivo"
    Malformed,
}

impl PartsOfSpeech {
    /// ¿Figura "noun" entre las etiquetas?
    pub fn is_noun(&self) -> bool {
        match self {
            PartsOfSpeech::Tags(tags) => tags.iter().any(|tag| tag == "noun"),
            PartsOfSpeech::Missing | PartsOfSpeech::Malformed => false,
        }
    }
}

/// Proveedor léxico: categorías gramaticales y frecuencias de corpus,
/// consultadas por lotes.
pub trait Lexicon {
    /// Categorías gramaticales de `words`, alineadas por índice con la
    /// consulta. La secuencia devuelta puede ser más corta que `words`.
    fn parts_of_speech_for_words(
        &self,
        words: &[String],
    ) -> Result<Vec<PartsOfSpeech>, ProviderError>;

    /// Frecuencia de corpus de cada palabra de `words`, alineada por índice.
    fn word_frequencies(&self, words: &[String]) -> Result<Vec<f64>, ProviderError>;
}

/// Formas canónicas singular/plural de una palabra.
pub trait Canonicalizer {
    /// Formas candidatas ordenadas; la primera se toma como singular
    /// canónico.
    fn singular_and_plural_forms(&self, word: &str) -> Vec<String>;
}

/// Clasificador de aceptabilidad de términos.
pub trait CoolnessClassifier {
    fn is_cool(&self, word: &str) -> bool;
}

/// ¿Es el token, completo, un emoji?
pub trait EmojiClassifier {
    fn is_emoji(&self, token: &str) -> bool;
}

/// ¿Sirve el emoji como tema?
pub trait EmojiTopicSource {
    fn is_ok_as_topic(&self, emoji: &str) -> bool;
}

// ==========================================================================
// Implementaciones neutras
// ==========================================================================

/// Canonicalizador identidad: la palabra es su propia forma canónica.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCanonicalizer;

impl Canonicalizer for IdentityCanonicalizer {
    fn singular_and_plural_forms(&self, word: &str) -> Vec<String> {
        vec![word.to_string()]
    }
}

/// Acepta cualquier término.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveCoolness;

impl CoolnessClassifier for PermissiveCoolness {
    fn is_cool(&self, _word: &str) -> bool {
        true
    }
}

/// Clasificador respaldado por la detección interna de pares subrogados:
/// el token es emoji si consta exactamente de un par reconocido.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurrogatePairEmojiClassifier;

impl EmojiClassifier for SurrogatePairEmojiClassifier {
    fn is_emoji(&self, token: &str) -> bool {
        let units: Vec<u16> = token.encode_utf16().collect();
        units.len() == 2 && emoji::is_emoji_surrogate_pair(units[0], units[1])
    }
}

/// Admite cualquier emoji como tema.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveTopicSource;

impl EmojiTopicSource for PermissiveTopicSource {
    fn is_ok_as_topic(&self, _emoji: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_of_speech_is_noun() {
        let entry = PartsOfSpeech::Tags(vec!["verb".to_string(), "noun".to_string()]);
        assert!(entry.is_noun());

        let entry = PartsOfSpeech::Tags(vec!["adjective".to_string()]);
        assert!(!entry.is_noun());

        assert!(!PartsOfSpeech::Tags(Vec::new()).is_noun());
        assert!(!PartsOfSpeech::Missing.is_noun());
        assert!(!PartsOfSpeech::Malformed.is_noun());
    }

    #[test]
    fn test_surrogate_pair_classifier() {
        let classifier = SurrogatePairEmojiClassifier;
        assert!(classifier.is_emoji("\u{1F431}"));
        assert!(!classifier.is_emoji("gato"));
        // Más de un par no cuenta como un único emoji
        assert!(!classifier.is_emoji("\u{1F431}\u{1F680}"));
        assert!(!classifier.is_emoji(""));
    }

    #[test]
    fn test_identity_canonicalizer() {
        let forms = IdentityCanonicalizer.singular_and_plural_forms("cats");
        assert_eq!(forms, vec!["cats".to_string()]);
    }
}
