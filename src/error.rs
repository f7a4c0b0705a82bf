//! Errores del extractor

use thiserror::Error;

/// Error público del crate.
///
/// Las respuestas por palabra inutilizables del proveedor no son errores:
/// se tratan como "no es sustantivo" en el pipeline.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Falta configuración obligatoria; se detecta al construir y no se
    /// devuelve ninguna instancia parcial.
    #[error("configuración inválida: {0}")]
    Configuration(String),

    /// Fallo devuelto por un proveedor externo. Se propaga tal cual, sin
    /// reintentos; el origen queda disponible vía `source()`.
    #[error("fallo del proveedor externo")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}
