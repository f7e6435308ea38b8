//! Errors surfaced by the detection engine.

use std::path::PathBuf;

use thiserror::Error;

use jataka_base::ValidationError;

/// Failure of a whole detection run.
///
/// Per-rule failures never surface here; they become
/// [`RuleDiagnostic`](crate::report::RuleDiagnostic)s in the report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid chart: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("cannot read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("cannot fingerprint chart: {0}")]
    Fingerprint(#[from] serde_json::Error),
    #[error("evaluation aborted by caller")]
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_base::Graha;

    #[test]
    fn validation_converts() {
        let e: EngineError = ValidationError::MissingPlanet(Graha::Ketu).into();
        assert!(matches!(e, EngineError::Validation(_)));
        assert!(e.to_string().contains("Ketu"));
    }
}
