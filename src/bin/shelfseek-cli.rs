use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use reqwest::Url;
use tokio::io::{AsyncBufReadExt, BufReader};

use shelfseek::client::{
    HttpBooksApi, NoViewport, Pagination, SearchController, SearchForm, Store, views,
};

/// Terminal front-end for the book search proxy.
///
/// Every line typed is treated as the new content of the search field.
/// `:next` and `:prev` page through results, `:quit` exits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Origin of the running proxy.
    #[arg(long, default_value = "http://localhost:3000")]
    endpoint: String,

    /// Initial search text.
    query: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let base = Url::parse(&args.endpoint).context("Invalid --endpoint")?;

    let store = Arc::new(Store::new());
    let controller = SearchController::new(store.clone(), Arc::new(HttpBooksApi::new(base)));
    let mut form = SearchForm::new(controller.clone());
    let pagination = Pagination::new(controller.clone(), Box::new(NoViewport));

    let mut changes = store.subscribe();
    let renderer = tokio::spawn(async move {
        let mut last = String::new();
        while changes.changed().await.is_ok() {
            let rendered = views::render(&changes.borrow_and_update());
            if rendered != last {
                println!("{rendered}");
                last = rendered;
            }
        }
    });

    if let Some(query) = args.query.as_deref() {
        form.start_search(query);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim_end() {
            ":quit" | ":q" => break,
            ":next" | ":n" => {
                if !pagination.page_up().await {
                    println!("No next page.");
                }
            }
            ":prev" | ":p" => {
                if !pagination.page_down().await {
                    println!("No previous page.");
                }
            }
            input => form.start_search(input),
        }
    }

    drop(form);
    renderer.abort();
    Ok(())
}
