use std::process::exit;

use fetchling::{RequestClient, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Todo {
    id: u32,
    title: String,
    completed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Expect the URL of a JSON endpoint as the first argument
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <url>", args[0]);
        eprintln!("Try:   {} https://jsonplaceholder.typicode.com/todos/1", args[0]);
        exit(1);
    }

    let client = RequestClient::new();
    let todo: Todo = client.fetch(&args[1]).await?;
    println!(
        "Todo #{}: {} (completed: {})",
        todo.id, todo.title, todo.completed
    );

    // The shared instance behaves the same as a fresh client
    let again: Todo = fetchling::shared().fetch(&args[1]).await?;
    println!("Fetched again via shared client: #{}", again.id);

    Ok(())
}
