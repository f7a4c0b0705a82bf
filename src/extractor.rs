//! Motor principal de extracción de sustantivos

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::cardinals;
use crate::config::Config;
use crate::emoji;
use crate::error::ExtractorError;
use crate::filters::{self, dedup_preserving_order};
use crate::providers::{
    Canonicalizer, CoolnessClassifier, EmojiClassifier, EmojiTopicSource, IdentityCanonicalizer,
    Lexicon, PartsOfSpeech, PermissiveCoolness, PermissiveTopicSource,
    SurrogatePairEmojiClassifier,
};
use crate::tokenizer;

/// Motor principal del extractor.
///
/// Orquesta el pipeline de extracción (tokenización, canonicalización,
/// filtrado y clasificación léxica) sobre los colaboradores inyectados.
/// No retiene estado mutable entre llamadas salvo la instantánea de
/// frecuencias de la última llamada de filtrado por rareza.
pub struct Extractor {
    config: Config,
    lexicon: Box<dyn Lexicon>,
    canonicalizer: Box<dyn Canonicalizer>,
    coolness: Box<dyn CoolnessClassifier>,
    emoji_classifier: Box<dyn EmojiClassifier>,
    emoji_topics: Box<dyn EmojiTopicSource>,
    frequencies_for_nouns: FxHashMap<String, f64>,
}

impl Extractor {
    /// Crea una nueva instancia del extractor.
    ///
    /// La configuración se valida de inmediato: sin clave de API no se
    /// devuelve ninguna instancia. Los colaboradores no léxicos arrancan
    /// con variantes neutras de paso; se sustituyen con los métodos
    /// `with_*`.
    pub fn new(config: Config, lexicon: Box<dyn Lexicon>) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self {
            config,
            lexicon,
            canonicalizer: Box::new(IdentityCanonicalizer),
            coolness: Box::new(PermissiveCoolness),
            emoji_classifier: Box::new(SurrogatePairEmojiClassifier),
            emoji_topics: Box::new(PermissiveTopicSource),
            frequencies_for_nouns: FxHashMap::default(),
        })
    }

    pub fn with_canonicalizer(mut self, canonicalizer: Box<dyn Canonicalizer>) -> Self {
        self.canonicalizer = canonicalizer;
        self
    }

    pub fn with_coolness_classifier(mut self, coolness: Box<dyn CoolnessClassifier>) -> Self {
        self.coolness = coolness;
        self
    }

    pub fn with_emoji_classifier(mut self, classifier: Box<dyn EmojiClassifier>) -> Self {
        self.emoji_classifier = classifier;
        self
    }

    pub fn with_emoji_topic_source(mut self, topics: Box<dyn EmojiTopicSource>) -> Self {
        self.emoji_topics = topics;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extrae los sustantivos candidatos del texto.
    ///
    /// Los emoji se extraen directamente del texto crudo y entran siempre en
    /// el resultado; las palabras pasan por canonicalización, deduplicación
    /// y la cadena de filtros antes de la consulta léxica por lotes. Un
    /// error del proveedor se devuelve sin resultado parcial.
    pub fn get_nouns_from_text(&self, text: &str) -> Result<Vec<String>, ExtractorError> {
        // Fase 1: emoji directamente del texto crudo, deduplicados
        let emoji_nouns = dedup_preserving_order(emoji::emoji_from_text(text));
        let non_emoji_text = emoji::remove_emoji(text, &emoji_nouns);

        // Fase 2: tokenización, forma singular, minúsculas y deduplicación
        let words: Vec<String> = tokenizer::worthwhile_words_from_text(&non_emoji_text)
            .into_iter()
            .map(|token| self.singular_form(token).to_lowercase())
            .collect();
        let mut words = dedup_preserving_order(words);

        // Fase 3: cadena de filtros estáticos. El filtro de longitud deja
        // pasar tokens que el clasificador reconoce como emoji.
        words.retain(|word| {
            filters::is_at_least_two_chars(word) || self.emoji_classifier.is_emoji(word)
        });
        words.retain(|word| self.coolness.is_cool(word));
        words.retain(|word| !filters::is_numeral(word));
        words.retain(|word| !cardinals::is_cardinal_number(word));

        debug!(
            palabras = words.len(),
            emoji = emoji_nouns.len(),
            "candidatas tras el filtrado"
        );

        // Fase 4: categorías gramaticales por lotes. La respuesta va
        // alineada por índice y puede ser más corta que la consulta.
        let parts = self
            .lexicon
            .parts_of_speech_for_words(&words)
            .map_err(ExtractorError::Provider)?;

        let mut nouns: Vec<String> = Vec::new();
        for (i, word) in words.iter().enumerate() {
            match parts.get(i) {
                Some(entry) if entry.is_noun() => nouns.push(word.clone()),
                Some(PartsOfSpeech::Malformed) => {
                    warn!(palabra = %word, "entrada inutilizable del proveedor; se descarta");
                }
                _ => {}
            }
        }

        // Los emoji entran al margen del resultado léxico.
        nouns.extend(emoji_nouns);
        Ok(nouns)
    }

    /// Conserva los sustantivos cuya frecuencia de corpus queda estrictamente
    /// por debajo de `max_frequency`.
    ///
    /// Los emoji no pasan por la consulta de frecuencias: se conservan si la
    /// fuente de temas los admite y se reincorporan al final. Un error del
    /// proveedor se devuelve sin resultado parcial y sin tocar la
    /// instantánea de frecuencias.
    pub fn filter_nouns_for_interestingness(
        &mut self,
        nouns: &[String],
        max_frequency: f64,
    ) -> Result<Vec<String>, ExtractorError> {
        let emoji_nouns: Vec<String> = nouns
            .iter()
            .filter(|noun| self.emoji_classifier.is_emoji(noun))
            .filter(|noun| self.emoji_topics.is_ok_as_topic(noun))
            .cloned()
            .collect();
        let word_nouns: Vec<String> = nouns
            .iter()
            .filter(|noun| !self.emoji_classifier.is_emoji(noun))
            .cloned()
            .collect();

        let frequencies = self
            .lexicon
            .word_frequencies(&word_nouns)
            .map_err(ExtractorError::Provider)?;

        // La respuesta va alineada por índice; las palabras sin frecuencia
        // devuelta quedan fuera.
        let mut kept: Vec<String> = Vec::new();
        for (i, frequency) in frequencies.iter().enumerate() {
            if i >= word_nouns.len() {
                break;
            }
            if *frequency < max_frequency {
                kept.push(word_nouns[i].clone());
            }
        }

        debug!(
            consultadas = word_nouns.len(),
            conservadas = kept.len(),
            emoji = emoji_nouns.len(),
            "filtrado por frecuencia"
        );

        // Instantánea de la última consulta correcta: cada par
        // palabra-frecuencia devuelto, no solo las conservadas.
        self.frequencies_for_nouns = word_nouns
            .iter()
            .cloned()
            .zip(frequencies.iter().copied())
            .collect();

        kept.extend(emoji_nouns);
        Ok(kept)
    }

    /// Frecuencias calculadas en la última llamada correcta de
    /// `filter_nouns_for_interestingness`. Arranca vacía.
    pub fn frequencies_for_cached_nouns(&self) -> &FxHashMap<String, f64> {
        &self.frequencies_for_nouns
    }

    /// Forma singular canónica: la primera forma devuelta por el
    /// canonicalizador, o la propia palabra si no devuelve ninguna.
    fn singular_form(&self, word: &str) -> String {
        self.canonicalizer
            .singular_and_plural_forms(word)
            .into_iter()
            .next()
            .unwrap_or_else(|| word.to_string())
    }
}
