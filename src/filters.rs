//! Predicados puros sobre palabras candidatas

use rustc_hash::FxHashSet;

/// Una palabra merece analizarse si tiene más de un carácter y no contiene
/// `@` en ninguna posición.
pub fn is_worth_checking(word: &str) -> bool {
    is_at_least_two_chars(word) && !word.contains('@')
}

pub fn is_at_least_two_chars(word: &str) -> bool {
    word.chars().count() > 1
}

/// ¿Se interpreta la palabra completa como número?
///
/// Análisis numérico de la cadena entera: "42", "3.5" o "-7" cuentan como
/// numerales; "42nd" no.
pub fn is_numeral(word: &str) -> bool {
    word.parse::<f64>().is_ok()
}

/// Deduplica conservando la primera aparición de cada elemento.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}
