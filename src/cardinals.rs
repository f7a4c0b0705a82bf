//! Números cardinales escritos con letras
//!
//! Lista estática de pertenencia exacta: una palabra candidata que coincide
//! con un cardinal escrito ("seven", "forty-two") se descarta del pipeline.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Unidades e irregulares hasta diecinueve
const UNITS_AND_TEENS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

/// Decenas
const TENS: &[&str] = &[
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Escalas
const SCALES: &[&str] = &["hundred", "thousand", "million", "billion", "trillion"];

/// Conjunto completo: palabras base más los compuestos con guión
/// ("twenty-one" … "ninety-nine"), montado una sola vez.
static CARDINAL_NUMBERS: Lazy<FxHashSet<String>> = Lazy::new(|| {
    let mut set = FxHashSet::default();
    for word in UNITS_AND_TEENS.iter().chain(TENS).chain(SCALES) {
        set.insert((*word).to_string());
    }
    for tens in TENS {
        for unit in &UNITS_AND_TEENS[1..10] {
            set.insert(format!("{tens}-{unit}"));
        }
    }
    set
});

/// Pertenencia exacta a la lista de cardinales.
pub fn is_cardinal_number(word: &str) -> bool {
    CARDINAL_NUMBERS.contains(word)
}
