//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Executing the round-trip is left to the transport, keeping this layer
//! deterministic and free of I/O.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, CONTENT_TYPE_JSON};
use crate::types::{Todo, TodoCollection, WireId};

const LIST_PATH: &str = "/todos/api/v1.0/todos";
const CREATE_PATH: &str = "/todos/api/v1.0/todo/create";
const ITEM_PATH: &str = "/todos/api/v1.0/todo";
const DELETE_PATH: &str = "/todos/api/v1.0/todo/delete";

/// Synchronous, stateless request builder for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_url(&self) -> String {
        format!("{}{LIST_PATH}", self.base_url)
    }

    pub fn create_url(&self) -> String {
        format!("{}{CREATE_PATH}", self.base_url)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}{ITEM_PATH}/{id}", self.base_url)
    }

    pub fn delete_url(&self, id: &str) -> String {
        format!("{}{DELETE_PATH}/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.list_url())
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(todo)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::new(HttpMethod::Post, self.create_url()).with_body(CONTENT_TYPE_JSON, body))
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.delete_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<TodoCollection, ApiError> {
        let body = response.into_success()?;
        serde_json::from_str(&body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        let body = response.into_success()?;
        serde_json::from_str(&body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Return `submitted` with the id the server assigned, if its reply
    /// carries one. Title, body, and priority are never taken from the reply.
    pub fn parse_create_todo(
        &self,
        response: HttpResponse,
        submitted: Todo,
    ) -> Result<Todo, ApiError> {
        let body = response.into_success()?;
        let assigned = serde_json::from_str::<WireId>(&body)
            .ok()
            .and_then(WireId::resolve);
        Ok(Todo {
            id: assigned.or(submitted.id),
            ..submitted
        })
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        response.into_success()?;
        Ok(())
    }
}
