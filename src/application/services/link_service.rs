//! Link shortening and redirect resolution service.

use std::sync::Arc;

use crate::application::error::ShortenError;
use crate::application::services::uniqueness::UniquenessValidator;
use crate::domain::context::OperationContext;
use crate::domain::entities::ShortCode;
use crate::domain::generator::CodeGenerator;
use crate::domain::repositories::{StorageError, UrlRepository};
use crate::utils::url_normalizer::sanitize_url;
use tracing::{debug, info, warn};

/// Upper bound on candidate codes drawn per shorten request.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Tunables for [`LinkService`].
#[derive(Debug, Clone)]
pub struct LinkServiceSettings {
    /// Hard cap on generate/validate rounds. No backoff between rounds.
    pub max_attempts: u32,
    /// Public base URL used to compose full short URLs.
    pub public_domain: String,
}

impl Default for LinkServiceSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            public_domain: "http://localhost:8080".to_string(),
        }
    }
}

/// How the code search loop ended.
#[derive(Debug)]
enum ShortenOutcome {
    Stored(ShortCode),
    Fatal(ShortenError),
    Exhausted,
}

/// Result of a single generate/validate/store round.
#[derive(Debug)]
enum Attempt {
    Stored(ShortCode),
    Collision,
}

/// Service for creating short links and resolving them back.
///
/// Composes a [`CodeGenerator`], a [`UniquenessValidator`] and a
/// [`UrlRepository`] under a bounded retry policy. Collisions are expected to
/// be rare in the 48-bit code space; the bound guards against a broken random
/// source or a saturated code space.
pub struct LinkService<R: UrlRepository + ?Sized, G: CodeGenerator + ?Sized> {
    repository: Arc<R>,
    generator: Arc<G>,
    validator: UniquenessValidator<R>,
    settings: LinkServiceSettings,
}

/// Link service over type-erased collaborators, as held in application state.
pub type DynLinkService = LinkService<dyn UrlRepository, dyn CodeGenerator>;

impl<R: UrlRepository + ?Sized, G: CodeGenerator + ?Sized> LinkService<R, G> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, generator: Arc<G>, settings: LinkServiceSettings) -> Self {
        Self {
            validator: UniquenessValidator::new(Arc::clone(&repository)),
            repository,
            generator,
            settings,
        }
    }

    /// Shortens a long URL and returns the stored short code.
    ///
    /// # Flow
    ///
    /// 1. Sanitize the URL (prepend `http://` if no scheme)
    /// 2. Draw a candidate code, check it against storage
    /// 3. On a free code, store the mapping; on a taken code, draw again
    /// 4. Stop after `max_attempts` rounds
    ///
    /// A write rejected by the storage uniqueness constraint counts as a
    /// collision and consumes one attempt.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidInput`] if the URL is empty
    /// - [`ShortenError::RandomSource`] if the generator fails (not retried)
    /// - [`ShortenError::Validation`] if the uniqueness lookup fails (not retried)
    /// - [`ShortenError::ExhaustedRetries`] if every candidate was taken
    /// - [`ShortenError::StorageWrite`] if the write fails
    pub async fn shorten(
        &self,
        ctx: &OperationContext,
        long_url: &str,
    ) -> Result<ShortCode, ShortenError> {
        let sanitized = sanitize_url(long_url)
            .map_err(|e| ShortenError::InvalidInput(e.to_string()))?;

        match self.store_with_unique_code(ctx, &sanitized).await {
            ShortenOutcome::Stored(code) => {
                metrics::counter!("shortener_links_created_total").increment(1);
                info!(
                    request_id = ctx.request_id(),
                    short_code = %code,
                    long_url = %sanitized,
                    "Successfully shortened URL"
                );
                Ok(code)
            }
            ShortenOutcome::Fatal(err) => {
                warn!(
                    request_id = ctx.request_id(),
                    kind = err.kind(),
                    error = %err,
                    "Failed to shorten URL"
                );
                Err(err)
            }
            ShortenOutcome::Exhausted => {
                metrics::counter!("shortener_exhausted_retries_total").increment(1);
                warn!(
                    request_id = ctx.request_id(),
                    attempts = self.settings.max_attempts,
                    "Gave up looking for a unique short code"
                );
                Err(ShortenError::ExhaustedRetries {
                    attempts: self.settings.max_attempts,
                })
            }
        }
    }

    /// Resolves a short code, or a routed path such as `/abc123`, to its long URL.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::NotFound`] if no mapping exists
    /// - [`ShortenError::StorageRead`] on storage failure
    pub async fn resolve(
        &self,
        ctx: &OperationContext,
        path: &str,
    ) -> Result<String, ShortenError> {
        let code = path.trim_start_matches('/');

        if code.is_empty() {
            return Err(ShortenError::NotFound(code.to_string()));
        }

        let long_url = self
            .repository
            .get_url(ctx, code)
            .await
            .map_err(ShortenError::StorageRead)?
            .ok_or_else(|| ShortenError::NotFound(code.to_string()))?;

        metrics::counter!("shortener_redirects_total").increment(1);
        debug!(
            request_id = ctx.request_id(),
            short_code = code,
            "Resolved short code"
        );

        Ok(long_url)
    }

    /// Deletes the mapping for a short code.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::NotFound`] if no mapping existed
    /// - [`ShortenError::StorageWrite`] on storage failure
    pub async fn delete(&self, ctx: &OperationContext, code: &str) -> Result<(), ShortenError> {
        let removed = self
            .repository
            .delete_url(ctx, code)
            .await
            .map_err(ShortenError::StorageWrite)?;

        if !removed {
            return Err(ShortenError::NotFound(code.to_string()));
        }

        info!(
            request_id = ctx.request_id(),
            short_code = code,
            "Deleted URL mapping"
        );
        Ok(())
    }

    /// Checks that storage is reachable.
    pub async fn check_storage(&self, ctx: &OperationContext) -> Result<(), StorageError> {
        self.repository.ping(ctx).await
    }

    /// Constructs the full short URL from the configured domain and a code.
    pub fn short_url(&self, code: &ShortCode) -> String {
        format!(
            "{}/{}",
            self.settings.public_domain.trim_end_matches('/'),
            code
        )
    }

    async fn store_with_unique_code(
        &self,
        ctx: &OperationContext,
        long_url: &str,
    ) -> ShortenOutcome {
        for attempt in 1..=self.settings.max_attempts {
            match self.try_store(ctx, long_url, attempt).await {
                Ok(Attempt::Stored(code)) => return ShortenOutcome::Stored(code),
                Ok(Attempt::Collision) => {
                    metrics::counter!("shortener_code_collisions_total").increment(1);
                }
                Err(err) => return ShortenOutcome::Fatal(err),
            }
        }

        ShortenOutcome::Exhausted
    }

    async fn try_store(
        &self,
        ctx: &OperationContext,
        long_url: &str,
        attempt: u32,
    ) -> Result<Attempt, ShortenError> {
        let candidate = self
            .generator
            .generate()
            .map_err(ShortenError::RandomSource)?;

        let unique = self
            .validator
            .is_unique(ctx, candidate.as_str())
            .await
            .map_err(ShortenError::Validation)?;

        if !unique {
            debug!(
                request_id = ctx.request_id(),
                short_code = %candidate,
                attempt,
                "Candidate code already taken"
            );
            return Ok(Attempt::Collision);
        }

        match self
            .repository
            .save_url(ctx, long_url, candidate.as_str())
            .await
        {
            Ok(()) => Ok(Attempt::Stored(candidate)),
            Err(StorageError::Conflict(_)) => {
                warn!(
                    request_id = ctx.request_id(),
                    short_code = %candidate,
                    attempt,
                    "Code was claimed by a concurrent request, retrying"
                );
                Ok(Attempt::Collision)
            }
            Err(e) => Err(ShortenError::StorageWrite(e)),
        }
    }
}
