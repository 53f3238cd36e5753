//! Short code generation.
//!
//! Provides the production [`RandomCodeGenerator`] and a deterministic
//! [`SequenceCodeGenerator`] used by tests and local demos.

use crate::domain::entities::ShortCode;
use crate::domain::generator::{CodeGenerator, GeneratorError};
use base64::Engine as _;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Length of random bytes before base64 encoding.
pub const CODE_LENGTH_BYTES: usize = 6;

/// Length of an encoded code. Six bytes encode to eight characters with no
/// padding emitted.
pub const CODE_LENGTH_CHARS: usize = 8;

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// (padded alphabet), producing an 8-character code with 48 bits of entropy.
///
/// # Errors
///
/// Returns [`GeneratorError::RandomSource`] if the system random number
/// generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 8);
/// ```
pub fn generate_code() -> Result<ShortCode, GeneratorError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| GeneratorError::RandomSource(e.to_string()))?;

    Ok(ShortCode::new(
        base64::engine::general_purpose::URL_SAFE.encode(buffer),
    ))
}

/// Production generator backed by the operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> Result<ShortCode, GeneratorError> {
        generate_code()
    }
}

/// Deterministic generator that cycles through a fixed list of codes.
///
/// Counts every call, which lets tests assert how many candidates were drawn.
#[derive(Debug)]
pub struct SequenceCodeGenerator {
    codes: Vec<String>,
    calls: AtomicUsize,
}

impl SequenceCodeGenerator {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times [`CodeGenerator::generate`] has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> Result<ShortCode, GeneratorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if self.codes.is_empty() {
            return Err(GeneratorError::EmptySequence);
        }

        Ok(ShortCode::new(self.codes[call % self.codes.len()].clone()))
    }
}
