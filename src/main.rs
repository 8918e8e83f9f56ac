use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use recs_console::{
    api::HttpBackend,
    config::Config,
    ui::{actions, region::OutputRegion},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recs_console=info")),
        )
        .init();

    let config = Config::from_env()?;
    let backend = Arc::new(HttpBackend::new(&config.api_base_url)?);

    let seed_status = Arc::new(OutputRegion::new("seed"));
    let recs_output = Arc::new(OutputRegion::new("recs"));
    spawn_printer(&seed_status);
    spawn_printer(&recs_output);

    println!("Recommendations console (backend: {})", config.api_base_url);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => {}
            Some("seed") => {
                let backend = Arc::clone(&backend);
                let region = Arc::clone(&seed_status);
                // Each trigger is an independent task; repeated triggers race
                // and the region's generation counter arbitrates.
                tokio::spawn(async move {
                    actions::seed_demo(backend.as_ref(), &region).await;
                });
            }
            Some("recs") => {
                let user_id = parts.next().unwrap_or("").to_string();
                let k = parts.next().unwrap_or("").to_string();
                let backend = Arc::clone(&backend);
                let region = Arc::clone(&recs_output);
                tokio::spawn(async move {
                    actions::fetch_recommendations(backend.as_ref(), &region, &user_id, &k).await;
                });
            }
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("Unknown command: {} (try 'help')", other),
        }
    }

    Ok(())
}

/// Prints region updates as they arrive, one line per change
fn spawn_printer(region: &Arc<OutputRegion>) {
    let name = region.name();
    let mut updates = region.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let text = updates.borrow_and_update().clone();
            println!("[{}] {}", name, text);
        }
    });
}

fn print_help() {
    println!("Commands:");
    println!("  seed                 seed demo data on the backend");
    println!("  recs <user_id> [k]   fetch top-k recommendations (k defaults to 5)");
    println!("  help                 show this help");
    println!("  quit                 exit");
}
