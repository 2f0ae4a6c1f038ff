//! Integration tests for the image service and decode pipeline.

mod mocks;

use contact_book_core::domain::ImageId;
use contact_book_core::error::ImageError;
use contact_book_core::observability::Metrics;
use contact_book_core::services::{ImageService, ImageServiceImpl};
use mocks::MockBlobStore;
use std::sync::Arc;

// 1x1 transparent PNG
const RAW_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn service(store: &MockBlobStore) -> ImageServiceImpl {
    ImageServiceImpl::new(Arc::new(store.clone()), Metrics::new())
}

#[tokio::test]
async fn test_jpeg_data_uri_stored_with_jpeg_key() {
    let store = MockBlobStore::new();
    let service = service(&store);

    let id = service
        .create_image(&format!("data:image/jpeg;base64,{}", RAW_BASE64))
        .await
        .unwrap();

    assert!(id.as_str().starts_with("contacts/images/"));
    assert!(id.as_str().ends_with(".jpeg"));
    assert_eq!(store.get_call_count("store"), 1);
    assert!(store.contains(id.as_str()));
}

#[tokio::test]
async fn test_prefixless_payload_defaults_to_png() {
    let store = MockBlobStore::new();
    let service = service(&store);

    let id = service.create_image(RAW_BASE64).await.unwrap();
    assert!(id.as_str().ends_with(".png"));
}

#[tokio::test]
async fn test_corrupted_payload_never_reaches_the_store() {
    let store = MockBlobStore::new();
    let service = service(&store);

    let result = service
        .create_image("data:image/png;base64,!!not-base64!!")
        .await;

    assert!(matches!(result, Err(ImageError::Corrupted)));
    assert_eq!(store.get_call_count("store"), 0);
}

#[tokio::test]
async fn test_get_image_absent_key_is_none() {
    let store = MockBlobStore::new();
    let service = service(&store);

    let unknown = ImageId::new("contacts/images/unknown.png").unwrap();
    let result = service.get_image(&unknown).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_image_decodes_then_overwrites() {
    let store = MockBlobStore::new();
    let service = service(&store);

    let id = service.create_image(RAW_BASE64).await.unwrap();
    service
        .update_image(&id, &format!("data:image/png;base64,{}", RAW_BASE64))
        .await
        .unwrap();

    assert_eq!(store.get_call_count("update"), 1);
}

#[tokio::test]
async fn test_update_image_corrupted_payload_skips_store() {
    let store = MockBlobStore::new();
    let service = service(&store);

    let id = service.create_image(RAW_BASE64).await.unwrap();
    let result = service.update_image(&id, "%%%").await;

    assert!(matches!(result, Err(ImageError::Corrupted)));
    assert_eq!(store.get_call_count("update"), 0);
}

#[tokio::test]
async fn test_delete_image_failure_is_swallowed_and_counted() {
    let store = MockBlobStore::new();
    let metrics = Metrics::new();
    let service = ImageServiceImpl::new(Arc::new(store.clone()), metrics.clone());

    let id = service.create_image(RAW_BASE64).await.unwrap();
    store.fail_deletes();

    // Must not panic or surface an error
    service.delete_image(&id).await;

    assert_eq!(store.get_call_count("delete"), 1);
    assert_eq!(metrics.cleanup_failures(), 1);
}

#[tokio::test]
async fn test_images_stored_metric() {
    let store = MockBlobStore::new();
    let metrics = Metrics::new();
    let service = ImageServiceImpl::new(Arc::new(store.clone()), metrics.clone());

    service.create_image(RAW_BASE64).await.unwrap();
    service.create_image(RAW_BASE64).await.unwrap();

    assert_eq!(metrics.images_stored(), 2);
}
