use super::config::ConfigError;
use crate::core::elements::ElementTableError;
use crate::core::models::template::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Template error: {source}")]
    Template {
        #[from]
        source: TemplateError,
    },

    #[error("Element table error: {source}")]
    ElementTable {
        #[from]
        source: ElementTableError,
    },
}
