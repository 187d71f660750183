use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use todo_client::{ClientConfig, Credentials, TodoApi};
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Parser)]
#[command(author, version, about = "Client for the remote to-do list API")]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the todo service
    #[clap(long, env = "TODO_HOST", default_value = "http://localhost:5000")]
    host: String,

    /// Basic-auth username
    #[clap(long, env = "TODO_USERNAME")]
    username: String,

    /// Basic-auth password
    #[clap(long, env = "TODO_PASSWORD", hide_env_values = true)]
    password: String,

    /// Per-request timeout in seconds; 0 disables it
    #[clap(long, env = "TODO_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Create two todos, list, delete the first, list again
    Demo,

    /// List every todo
    List,

    /// Create a todo
    Create {
        title: String,
        #[clap(long, default_value = "")]
        body: String,
        #[clap(long, default_value = "1", allow_negative_numbers = true)]
        priority: i32,
    },

    /// Fetch a todo by id
    Get { id: String },

    /// Fetch the first todo with an exact title
    Find { title: String },

    /// Delete a todo by id
    Delete { id: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .map_err(|e| anyhow!(e))?;

    let app = App::parse();
    let global = app.global;

    let timeout = (global.timeout_secs > 0).then(|| Duration::from_secs(global.timeout_secs));
    let config = ClientConfig::new(global.host, Credentials::new(global.username, global.password))
        .with_timeout(timeout);
    let api = TodoApi::new(&config);

    let mut out = std::io::stdout().lock();
    match app.command.unwrap_or(SubCommands::Demo) {
        SubCommands::Demo => todo_demo::run_demo(&api, &mut out)?,
        SubCommands::List => todo_demo::list(&api, &mut out)?,
        SubCommands::Create {
            title,
            body,
            priority,
        } => todo_demo::create(&api, &title, &body, priority, &mut out)?,
        SubCommands::Get { id } => todo_demo::get(&api, &id, &mut out)?,
        SubCommands::Find { title } => todo_demo::find(&api, &title, &mut out)?,
        SubCommands::Delete { id } => todo_demo::delete(&api, &id, &mut out)?,
    }
    Ok(())
}
