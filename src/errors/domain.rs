//! Domain-level error type used across the engine.
//!
//! This error type is presentation-agnostic. The orchestrator wraps it in
//! `crate::error::EngineError` at the driver boundary using the provided
//! `From<DomainError>` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds: a caller asked for something the rules forbid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    MustFollowSuit,
    MustPlayTrump,
    NotPlaying,
    ParseCard,
    Other,
}

/// Invariant kinds: internal state the engine must never reach.
///
/// These are unrecoverable; the round cannot continue once one is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvariantKind {
    /// Deck still short after recycling the discard pile.
    DeckExhausted,
    /// The 52-card multiset across deck, discards, hands, and trump broke.
    Conservation,
    /// The same physical card observed in two zones at once.
    DuplicateCard,
    Other,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input validation or game-rule violation.
    Validation(ValidationKind, String),
    /// Broken internal invariant; unrecoverable.
    Invariant(InvariantKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Invariant(kind, d) => write!(f, "invariant {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other, detail.into())
    }
    pub fn invariant(kind: InvariantKind, detail: impl Into<String>) -> Self {
        Self::Invariant(kind, detail.into())
    }
}
