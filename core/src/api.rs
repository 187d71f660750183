//! High-level todo operations over the blocking transport.
//!
//! # Design
//! Every operation comes in two forms. `try_*` returns the `ApiError` so the
//! caller can inspect it. The plain form logs a warning and returns `None`
//! or `false`, so nothing fails past it.

use tracing::warn;

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::HttpTransport;
use crate::types::{Todo, TodoCollection};

/// Todo API bound to one host and one set of credentials.
#[derive(Debug, Clone)]
pub struct TodoApi {
    client: TodoClient,
    transport: HttpTransport,
}

impl TodoApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: TodoClient::new(&config.host_url),
            transport: HttpTransport::new(config.credentials.clone(), config.timeout),
        }
    }

    pub fn try_list_all(&self) -> Result<TodoCollection, ApiError> {
        let response = self.transport.execute(&self.client.build_list_todos())?;
        self.client.parse_list_todos(response)
    }

    pub fn try_create(&self, title: &str, body: &str, priority: i32) -> Result<Todo, ApiError> {
        let todo = Todo::new(title, body, priority);
        let request = self.client.build_create_todo(&todo)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_create_todo(response, todo)
    }

    pub fn try_get_by_id(&self, id: &str) -> Result<Todo, ApiError> {
        let response = self.transport.execute(&self.client.build_get_todo(id))?;
        self.client.parse_get_todo(response)
    }

    /// First listed todo titled exactly `title`; `Ok(None)` when none matches.
    pub fn try_get_by_title(&self, title: &str) -> Result<Option<Todo>, ApiError> {
        Ok(self.try_list_all()?.find_by_title(title).cloned())
    }

    pub fn try_delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self.transport.execute(&self.client.build_delete_todo(id))?;
        self.client.parse_delete_todo(response)
    }

    pub fn list_all(&self) -> Option<TodoCollection> {
        self.try_list_all()
            .inspect_err(|err| warn!(error = %err, "unable to get todos"))
            .ok()
    }

    pub fn create(&self, title: &str, body: &str, priority: i32) -> Option<Todo> {
        self.try_create(title, body, priority)
            .inspect_err(|err| warn!(error = %err, title, "unable to create new task"))
            .ok()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Todo> {
        self.try_get_by_id(id)
            .inspect_err(|err| warn!(error = %err, id, "unable to get todo"))
            .ok()
    }

    pub fn get_by_title(&self, title: &str) -> Option<Todo> {
        self.list_all()?.find_by_title(title).cloned()
    }

    /// `true` iff the server acknowledged the delete with a 2xx status.
    pub fn delete(&self, id: &str) -> bool {
        self.try_delete(id)
            .inspect_err(|err| warn!(error = %err, id, "unable to delete todo"))
            .is_ok()
    }
}
