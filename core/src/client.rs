//! Stateless HTTP request builder and response parser for the collection API.
//!
//! # Design
//! `ItemClient` holds only the collection URL and carries no state between
//! calls. Each operation is split into a `build_*` method that produces an
//! [`HttpRequest`] and a `parse_*` method that consumes an [`HttpResponse`];
//! the caller executes the round-trip in between. The collection endpoint is
//! the base URL itself, per-item endpoints append `/{id}`.
//!
//! Success is any status below 300, uniformly across operations — the API
//! this models signals errors only through 3xx-and-up statuses, not through
//! per-operation status codes.

use crate::error::RemoteError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateItem, Item, ItemId, UpdateItem};

/// Stateless client for one remote collection resource.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_load(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &CreateItem) -> Result<HttpRequest, RemoteError> {
        let body = serde_json::to_string(input).map_err(|e| RemoteError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: &ItemId, input: &UpdateItem) -> Result<HttpRequest, RemoteError> {
        let body = serde_json::to_string(input).map_err(|e| RemoteError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: &ItemId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_load(&self, response: HttpResponse) -> Result<Vec<Item>, RemoteError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| RemoteError::Decode(e.to_string()))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Item, RemoteError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| RemoteError::Decode(e.to_string()))
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Item, RemoteError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| RemoteError::Decode(e.to_string()))
    }

    /// A delete confirms through its status alone; the body is ignored.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), RemoteError> {
        if response.status >= 300 {
            return Err(RemoteError::Failed("Delete request failed"));
        }
        Ok(())
    }
}

/// Statuses of 300 and above are errors; everything below is success.
fn check_success(response: &HttpResponse) -> Result<(), RemoteError> {
    if response.status < 300 {
        return Ok(());
    }
    Err(RemoteError::Http {
        status: response.status,
    })
}
