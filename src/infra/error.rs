use thiserror::Error;

/// Failures raised while bringing the service up: binding the listener,
/// reaching Postgres, or installing telemetry.
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("failed to bind http listener: {0}")]
    Bind(#[from] std::io::Error),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("tracing setup failed: {0}")]
    Telemetry(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl InfraError {
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_render_their_context() {
        let bind = InfraError::Bind(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert_eq!(
            bind.to_string(),
            "failed to bind http listener: address in use"
        );
        assert_eq!(
            InfraError::database("connection refused").to_string(),
            "database unavailable: connection refused"
        );
        assert_eq!(
            InfraError::configuration("database url is not configured").to_string(),
            "configuration error: database url is not configured"
        );
    }
}
