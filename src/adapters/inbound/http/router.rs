use axum::{Router, routing::get};
use std::sync::Arc;

use super::{
    handlers::{delete_file, delete_without_name, download_file, list_files, upload_file},
    middleware::apply_middleware,
};
use crate::ports::services::FileService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub file_service: Arc<dyn FileService>,
}

/// Create the gateway router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(list_files).post(upload_file).delete(delete_without_name),
        )
        .route("/{filename}", get(download_file).delete(delete_file))
        .with_state(state)
}

/// Create the router wrapped in the full middleware stack
pub fn create_app(state: AppState, max_upload_bytes: usize) -> Router {
    apply_middleware(create_router(state), max_upload_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::{notification::DisabledNotifier, storage::ApacheObjectStoreAdapter},
        domain::value_objects::BucketName,
        services::FileServiceImpl,
    };
    use axum_test::TestServer;
    use object_store::memory::InMemory;

    fn create_test_app_state() -> AppState {
        let store = Arc::new(ApacheObjectStoreAdapter::new(Arc::new(InMemory::new())));
        let bucket = BucketName::new("router-tests".to_string()).unwrap();

        AppState {
            file_service: Arc::new(FileServiceImpl::new(
                bucket,
                store,
                Arc::new(DisabledNotifier),
            )),
        }
    }

    #[tokio::test]
    async fn test_root_lists_empty_bucket() {
        let server = TestServer::new(create_router(create_test_app_state())).unwrap();

        let response = server.get("/").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "error": false,
            "msg": "",
            "items": []
        }));
    }

    #[tokio::test]
    async fn test_unknown_method_is_rejected() {
        let server = TestServer::new(create_router(create_test_app_state())).unwrap();

        let response = server.put("/report.txt").await;
        response.assert_status(http::StatusCode::METHOD_NOT_ALLOWED);
    }
}
