//! Domain types for the todo API.
//!
//! # Design
//! The identifier goes out on the wire as `uuid` and is omitted until the
//! server has assigned one. On input `uuid` wins; a string or numeric `id`
//! is the fallback. Unknown keys are ignored. List responses come either as
//! a bare array or wrapped in `{"todos": [...]}`; both deserialize into the
//! same `TodoCollection`.

use std::fmt;
use std::ops::Index;

use serde::{de, Deserialize, Serialize};
use serde_json::Value;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "TodoWire")]
pub struct Todo {
    pub title: String,
    pub body: String,
    pub priority: i32,
    /// Server-assigned identifier; `None` on locally built items.
    #[serde(rename = "uuid", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Deserialize)]
struct TodoWire {
    title: String,
    body: String,
    priority: i32,
    #[serde(default)]
    uuid: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
}

impl From<TodoWire> for Todo {
    fn from(wire: TodoWire) -> Self {
        let id = WireId {
            uuid: wire.uuid,
            id: wire.id,
        }
        .resolve();
        Self {
            title: wire.title,
            body: wire.body,
            priority: wire.priority,
            id,
        }
    }
}

/// Identifier keys of a server payload, read without the rest of the item.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireId {
    #[serde(default)]
    uuid: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
}

impl WireId {
    pub(crate) fn resolve(self) -> Option<String> {
        self.uuid.and_then(id_text).or_else(|| self.id.and_then(id_text))
    }
}

fn id_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

impl Todo {
    pub fn new(title: impl Into<String>, body: impl Into<String>, priority: i32) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            priority,
            id: None,
        }
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TODO ID: {}, Title: {}, Body: {}, Priority: {}",
            self.id.as_deref().unwrap_or("<unassigned>"),
            self.title,
            self.body,
            self.priority
        )
    }
}

/// Ordered, read-only list of todos returned by a list call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Value")]
pub struct TodoCollection {
    todos: Vec<Todo>,
}

/// Pick the list shape first so item errors keep their own message.
impl TryFrom<Value> for TodoCollection {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = match value {
            Value::Object(mut map) => map
                .remove("todos")
                .ok_or_else(|| <serde_json::Error as de::Error>::missing_field("todos"))?,
            other => other,
        };
        let todos = serde_json::from_value(items)?;
        Ok(Self { todos })
    }
}

impl TodoCollection {
    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.todos.get(index)
    }

    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// First todo whose title equals `title` exactly.
    pub fn find_by_title(&self, title: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.title == title)
    }
}

impl From<Vec<Todo>> for TodoCollection {
    fn from(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}

impl Index<usize> for TodoCollection {
    type Output = Todo;

    fn index(&self, index: usize) -> &Todo {
        &self.todos[index]
    }
}

impl<'a> IntoIterator for &'a TodoCollection {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

impl IntoIterator for TodoCollection {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.into_iter()
    }
}
