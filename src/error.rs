use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the catalogue snippets and the config loader.
///
/// Dispatch failures of the notification registry have their own type,
/// [`NotifyError`](crate::behavioral::observer::NotifyError), because they
/// carry listener identities.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Método de pagamento inválido.")]
    InvalidPaymentMethod { method: String },

    #[error("Invalid user type: {0}")]
    InvalidUserType(String),

    #[error("E-mail already registered: {email}")]
    EmailTaken { email: String },

    #[error("Failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl CatalogError {
    pub fn invalid_payment_method(method: impl Into<String>) -> Self {
        Self::InvalidPaymentMethod {
            method: method.into(),
        }
    }
}
