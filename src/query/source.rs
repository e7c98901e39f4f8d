//! Product Sources
//!
//! Where product collections come from. The browser implementation issues a
//! single `GET` through `window.fetch`; tests plug in their own source.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{FetchError, FetchResult};
use crate::models::Product;

/// Anything that can produce the full product collection
#[async_trait(?Send)]
pub trait ProductSource {
    /// Fetch every product; one call is one request
    async fn fetch_products(&self) -> FetchResult<Vec<Product>>;
}

/// Product source backed by a REST endpoint
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    url: String,
}

impl HttpProductSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> FetchResult<Vec<Product>> {
        let window = web_sys::window()
            .ok_or_else(|| FetchError::Network("no window available".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(|e| FetchError::Network(js_message(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| FetchError::Network(js_message(&e)))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().map_err(|e| FetchError::Decode(js_message(&e)))?;
        let body = JsFuture::from(body)
            .await
            .map_err(|e| FetchError::Decode(js_message(&e)))?;
        let body = body
            .as_string()
            .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))?;

        decode_products(&body)
    }
}

/// Parse a `/products` response body
pub fn decode_products(body: &str) -> FetchResult<Vec<Product>> {
    Ok(serde_json::from_str(body)?)
}

/// Best-effort message out of a rejected promise
fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_products() {
        let body = r#"[
            {"id":1,"name":"A","price":1000,"description":"d","image":"u"},
            {"id":2,"name":"B","price":250000,"description":"e"}
        ]"#;
        let products = decode_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].image.as_deref(), Some("u"));
        assert_eq!(products[1].image, None);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_products(r#"{"error":"nope"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(decode_products("[]").unwrap(), Vec::new());
    }
}
