//! Binary shim wiring the library together.
//!
//! Resolves configuration, initializes tracing, opens the durable query store,
//! spawns the session actor and runs one submission: an optional CLI argument
//! replaces (and persists) the query, otherwise the last persisted query is
//! searched. The resulting stories are printed to stdout.

use hnscout::fetch::HttpSearchClient;
use hnscout::observability::init_tracing;
use hnscout::session::{SearchSession, SessionHandle, SessionSnapshot};
use hnscout::store::JsonQueryStore;
use hnscout::{Config, HnScoutError, Result};
use std::process::ExitCode;
use std::time::Duration;

/// Upper bound on waiting for a submission to settle.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();
    init_tracing(&config);

    match run(&config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            eprintln!("hnscout: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<ExitCode> {
    let store = JsonQueryStore::new(config.query_store_path())?;
    let client = HttpSearchClient::new()?;
    let handle = SearchSession::spawn(
        client,
        store,
        config.api_base.clone(),
        &config.default_query,
    )?;

    let query = match std::env::args().nth(1) {
        Some(arg) => {
            handle.set_query(arg.clone()).await?;
            arg
        }
        // The initial snapshot is published before spawn returns and no
        // command has been enqueued yet, so this read cannot observe a
        // stale query.
        None => handle.snapshot().query,
    };

    if query.is_empty() {
        eprintln!("hnscout: empty query, nothing to search");
        return Ok(ExitCode::FAILURE);
    }

    tracing::info!(query = %query, "searching");
    let submissions_before = handle.snapshot().submissions;
    handle.submit().await?;

    let snapshot = wait_for_settled(&handle, submissions_before).await?;
    if snapshot.result.has_error {
        eprintln!("hnscout: search for \"{query}\" failed");
        return Ok(ExitCode::FAILURE);
    }

    print_stories(&snapshot);
    Ok(ExitCode::SUCCESS)
}

/// Waits until the submission reaches a terminal snapshot.
///
/// Watch channels coalesce intermediate values, so the loop cannot count on
/// observing the loading snapshot: it waits for a snapshot whose submission
/// count has moved past `submissions_before` and that is no longer loading.
async fn wait_for_settled(
    handle: &SessionHandle,
    submissions_before: u64,
) -> Result<SessionSnapshot> {
    let mut rx = handle.watch();

    let settled = tokio::time::timeout(SETTLE_TIMEOUT, async {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            if snapshot.submissions > submissions_before && !snapshot.result.is_loading {
                return Ok::<_, HnScoutError>(snapshot);
            }
            rx.changed()
                .await
                .map_err(|_| HnScoutError::Session("session task has shut down".to_string()))?;
        }
    })
    .await
    .map_err(|_| HnScoutError::Session("timed out waiting for search to settle".to_string()))??;

    Ok(settled)
}

fn print_stories(snapshot: &SessionSnapshot) {
    if snapshot.result.data.is_empty() {
        println!("No stories matched \"{}\".", snapshot.query);
        return;
    }

    println!("Stories matching \"{}\":", snapshot.query);
    for story in &snapshot.result.data {
        println!();
        println!("  {}", story.title);
        println!("    {}", story.url);
        println!(
            "    by {} | {} points | {} comments | id {}",
            story.author, story.points, story.num_comments, story.object_id
        );
    }
}
