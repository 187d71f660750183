//! Demo driver and command handlers for `todo-demo`.
//!
//! Output meant for the user goes to the supplied writer; failures inside
//! `TodoApi` are reported through `tracing` by the library itself.

use std::io::Write;

use todo_client::{TodoApi, TodoCollection};

/// Create two todos, list them, delete the first, and list again.
pub fn run_demo<W: Write>(api: &TodoApi, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Adding todos")?;
    api.create("Study", "Study for exam", 2);
    api.create("Dinner", "Prepare dinner", 3);

    writeln!(out, "Getting todos")?;
    let todos = api.list_all();
    print_todos(todos.as_ref(), out)?;

    writeln!(out, "Removing todo")?;
    match todos.as_ref().and_then(TodoCollection::first).and_then(|t| t.id.as_deref()) {
        Some(id) => {
            api.delete(id);
        }
        None => tracing::warn!("no listed todo with an id to remove"),
    }

    writeln!(out, "Getting remaining todos")?;
    print_todos(api.list_all().as_ref(), out)
}

pub fn print_todos<W: Write>(todos: Option<&TodoCollection>, out: &mut W) -> std::io::Result<()> {
    for todo in todos.into_iter().flatten() {
        writeln!(out, "{todo}")?;
    }
    Ok(())
}

pub fn list<W: Write>(api: &TodoApi, out: &mut W) -> std::io::Result<()> {
    print_todos(api.list_all().as_ref(), out)
}

pub fn create<W: Write>(
    api: &TodoApi,
    title: &str,
    body: &str,
    priority: i32,
    out: &mut W,
) -> std::io::Result<()> {
    if let Some(todo) = api.create(title, body, priority) {
        writeln!(out, "{todo}")?;
    }
    Ok(())
}

pub fn get<W: Write>(api: &TodoApi, id: &str, out: &mut W) -> std::io::Result<()> {
    if let Some(todo) = api.get_by_id(id) {
        writeln!(out, "{todo}")?;
    }
    Ok(())
}

pub fn find<W: Write>(api: &TodoApi, title: &str, out: &mut W) -> std::io::Result<()> {
    match api.get_by_title(title) {
        Some(todo) => writeln!(out, "{todo}"),
        None => writeln!(out, "No todo titled {title:?}"),
    }
}

pub fn delete<W: Write>(api: &TodoApi, id: &str, out: &mut W) -> std::io::Result<()> {
    if api.delete(id) {
        writeln!(out, "Removed todo {id}")?;
    }
    Ok(())
}
