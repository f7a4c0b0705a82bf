//! Configuración del extractor

use crate::error::ExtractorError;

/// Configuración de construcción del extractor.
///
/// El registro de actividad no se configura aquí: el crate emite eventos
/// `tracing` y el llamador instala el suscriptor que prefiera.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Clave de API del proveedor léxico (obligatoria)
    pub api_key: String,
    /// Puerto del servicio auxiliar de memoización, si el cliente del
    /// proveedor usa uno (opcional)
    pub memoize_server_port: Option<u16>,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            memoize_server_port: None,
        }
    }

    pub fn with_memoize_server_port(mut self, port: u16) -> Self {
        self.memoize_server_port = Some(port);
        self
    }

    /// Valida la configuración obligatoria.
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.api_key.trim().is_empty() {
            return Err(ExtractorError::Configuration(
                "no se puede crear el extractor sin clave de API".to_string(),
            ));
        }
        Ok(())
    }
}
