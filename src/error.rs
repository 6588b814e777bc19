use thiserror::Error;

use crate::ai::DecisionError;
use crate::errors::DomainError;

/// Top-level engine error: everything `Game::run` can fail with.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("rules error: {0}")]
    Domain(#[from] DomainError),
    #[error("decision failed for seat {seat} during {phase}: {source}")]
    Decision {
        seat: u8,
        phase: &'static str,
        source: DecisionError,
    },
    #[error("configuration error: {detail}")]
    Config { detail: String },
}

impl EngineError {
    pub fn config(detail: impl Into<String>) -> Self {
        EngineError::Config {
            detail: detail.into(),
        }
    }

    pub fn decision(seat: u8, phase: &'static str, source: DecisionError) -> Self {
        EngineError::Decision {
            seat,
            phase,
            source,
        }
    }
}
