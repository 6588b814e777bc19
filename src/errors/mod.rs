pub mod domain;

pub use domain::{DomainError, InvariantKind, ValidationKind};
