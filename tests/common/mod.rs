#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortener::application::services::{LinkService, LinkServiceSettings};
use shortener::domain::context::OperationContext;
use shortener::domain::generator::CodeGenerator;
use shortener::domain::repositories::{StorageError, UrlRepository};
use shortener::infrastructure::persistence::InMemoryUrlRepository;
use shortener::routes::router;
use shortener::state::AppState;
use shortener::utils::code_generator::SequenceCodeGenerator;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_DOMAIN: &str = "http://short.url";

/// Storage whose every operation times out.
pub struct UnreachableUrlRepository;

#[async_trait]
impl UrlRepository for UnreachableUrlRepository {
    async fn save_url(
        &self,
        _ctx: &OperationContext,
        _long_url: &str,
        _short_code: &str,
    ) -> Result<(), StorageError> {
        Err(StorageError::Timeout(Duration::from_millis(5)))
    }

    async fn get_url(
        &self,
        _ctx: &OperationContext,
        _short_code: &str,
    ) -> Result<Option<String>, StorageError> {
        Err(StorageError::Timeout(Duration::from_millis(5)))
    }

    async fn delete_url(
        &self,
        _ctx: &OperationContext,
        _short_code: &str,
    ) -> Result<bool, StorageError> {
        Err(StorageError::Timeout(Duration::from_millis(5)))
    }

    async fn ping(&self, _ctx: &OperationContext) -> Result<(), StorageError> {
        Err(StorageError::Timeout(Duration::from_millis(5)))
    }
}

pub fn create_unreachable_state(generator: Arc<SequenceCodeGenerator>) -> AppState {
    create_test_state_with(Arc::new(UnreachableUrlRepository), generator, 10)
}

pub fn create_test_state_with(
    repository: Arc<dyn UrlRepository>,
    generator: Arc<SequenceCodeGenerator>,
    max_attempts: u32,
) -> AppState {
    let generator: Arc<dyn CodeGenerator> = generator;

    let link_service = LinkService::new(
        repository,
        generator,
        LinkServiceSettings {
            max_attempts,
            public_domain: TEST_DOMAIN.to_string(),
        },
    );

    AppState::new(Arc::new(link_service), None)
}

pub fn create_test_state(
    generator: Arc<SequenceCodeGenerator>,
) -> (AppState, Arc<InMemoryUrlRepository>) {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let state = create_test_state_with(repo.clone(), generator, 10);
    (state, repo)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn seed(repo: &InMemoryUrlRepository, code: &str, url: &str) {
    repo.save_url(&OperationContext::new("seed"), url, code)
        .await
        .unwrap();
}
