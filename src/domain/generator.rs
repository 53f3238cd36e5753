//! Short code generator contract.

use crate::domain::entities::ShortCode;

/// Errors produced while generating a candidate code.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("random source failure: {0}")]
    RandomSource(String),

    #[error("code sequence is empty")]
    EmptySequence,
}

/// Produces candidate short codes.
///
/// A generator is not responsible for uniqueness. Candidates are checked
/// against storage by the caller.
///
/// # Implementations
///
/// - [`crate::utils::code_generator::RandomCodeGenerator`] - OS entropy, URL-safe base64
/// - [`crate::utils::code_generator::SequenceCodeGenerator`] - Fixed list, for tests and demos
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> Result<ShortCode, GeneratorError>;
}
