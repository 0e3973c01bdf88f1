use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;


/// Reads a handler response body as JSON.
async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
