//! Paper Portal Console
//!
//! Line-oriented client for the portal. A typed keyword runs through the
//! search state machine in `state`; the dashboard feeds (search logs,
//! trending keywords) refresh in the background on a fixed period,
//! independent of whatever the search flow is doing. Quitting the console
//! aborts the pollers.

mod api;
mod state;


use api::{LogRow, PortalApi, TrendingRow};
use state::{FeedState, SearchCommand, SearchController, SearchPhase};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let base_url =
        std::env::var("PORTAL_URL").unwrap_or_else(|_| "http://127.0.0.1:8005".to_string());
    let poll_secs: u64 = std::env::var("POLL_SECS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(5);

    let api = Arc::new(PortalApi::new(&base_url));
    let logs_feed: Arc<Mutex<FeedState<Vec<LogRow>>>> = Arc::new(Mutex::new(FeedState::new()));
    let trends_feed: Arc<Mutex<FeedState<Vec<TrendingRow>>>> =
        Arc::new(Mutex::new(FeedState::new()));

    // 1. Spawn the log feed poller:
    let poller_api = api.clone();
    let poller_feed = logs_feed.clone();
    let logs_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(poll_secs));

        loop {
            interval.tick().await;
            // Every tick issues its own request, even with one still in
            // flight; the sequence guard keeps whichever response is newest
            let seq = poller_feed.lock().await.begin_request();
            let api = poller_api.clone();
            let feed = poller_feed.clone();
            tokio::spawn(async move {
                match api.logs().await {
                    Ok(rows) => {
                        feed.lock().await.apply(seq, rows);
                    }
                    Err(e) => tracing::warn!("Log feed refresh failed: {}", e),
                }
            });
        }
    });

    // 2. Spawn the trending feed poller (all-time view):
    let poller_api = api.clone();
    let poller_feed = trends_feed.clone();
    let trends_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(poll_secs));

        loop {
            interval.tick().await;
            let seq = poller_feed.lock().await.begin_request();
            let api = poller_api.clone();
            let feed = poller_feed.clone();
            tokio::spawn(async move {
                match api.trending("alltime").await {
                    Ok(rows) => {
                        feed.lock().await.apply(seq, rows);
                    }
                    Err(e) => tracing::warn!("Trending feed refresh failed: {}", e),
                }
            });
        }
    });

    // 3. Console loop:
    println!("Paper portal console. Type a keyword to search, or 'help' for commands.");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut controller = SearchController::new();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line.as_str(), ""));
        let rest = rest.trim();

        match command.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => print_help(),
            "search" => match controller.submit(rest) {
                Some(cmd) => run_search(&mut controller, &api, cmd).await,
                None => println!("Nothing to search for."),
            },
            "use" => match controller.accept_suggestion() {
                Some(cmd) => run_search(&mut controller, &api, cmd).await,
                None => println!("No suggestion to accept."),
            },
            "logs" => print_logs(&logs_feed).await,
            "trends" => {
                if rest.is_empty() {
                    print_trends_feed(&trends_feed).await;
                } else {
                    match api.trending(rest).await {
                        Ok(rows) => print_trend_rows(&rows),
                        Err(e) => println!("Could not fetch trends: {}", e),
                    }
                }
            }
            "review" => review_entry(&api, &logs_feed, rest).await,
            "delete" => {
                if rest.is_empty() {
                    println!("Usage: delete <log-id>");
                } else {
                    match api.delete(rest).await {
                        Ok(message) => println!("{}", message),
                        Err(e) => println!("Delete failed: {}", e),
                    }
                }
            }
            "report" => save_report(&api, rest).await,
            _ => {
                // Anything that is not a command is a search query
                if let Some(cmd) = controller.submit(&line) {
                    run_search(&mut controller, &api, cmd).await;
                }
            }
        }
    }

    // Leaving the console stops the dashboard polling; in-flight responses
    // are dropped with their tasks
    logs_task.abort();
    trends_task.abort();

    Ok(())
}

async fn run_search(controller: &mut SearchController, api: &PortalApi, command: SearchCommand) {
    match api.search(&command.query).await {
        Ok(outcome) => controller.complete(command.seq, outcome),
        Err(e) => {
            tracing::warn!("Search request failed: {}", e);
            controller.fail(command.seq, "Could not reach the portal. Try again.");
        }
    }

    render_phase(controller.phase());
}

fn render_phase(phase: &SearchPhase) {
    match phase {
        SearchPhase::ResultsShown { query, results } if results.is_empty() => {
            println!("No results for {:?}.", query);
        }
        SearchPhase::ResultsShown { query, results } => {
            println!("{} result(s) for {:?}:", results.len(), query);
            for row in results {
                println!("  {} - {} [{}]", row.title, row.author, row.source);
                println!("    {}", row.abstract_text);
            }
        }
        SearchPhase::SuggestionShown { suggestion, .. } => {
            println!(
                "No results. Did you mean {:?}? Type 'use' to search it.",
                suggestion
            );
        }
        SearchPhase::ErrorShown { message, .. } => println!("{}", message),
        _ => {}
    }
}

async fn print_logs(feed: &Arc<Mutex<FeedState<Vec<LogRow>>>>) {
    let feed = feed.lock().await;
    match feed.latest() {
        Some(rows) if !rows.is_empty() => {
            for row in rows {
                let outcome = if row.found_in_catalog { "hit " } else { "miss" };
                let reviewed = if row.reviewed { " (reviewed)" } else { "" };
                println!(
                    "  {}  {}  {:<28} {}{}  [{}]",
                    row.date_searched.format("%Y-%m-%d %H:%M"),
                    outcome,
                    row.keyword,
                    row.category.as_deref().unwrap_or("uncategorized"),
                    reviewed,
                    row.id
                );
            }
        }
        _ => println!("No search logs yet."),
    }
}

async fn print_trends_feed(feed: &Arc<Mutex<FeedState<Vec<TrendingRow>>>>) {
    let feed = feed.lock().await;
    match feed.latest() {
        Some(rows) => print_trend_rows(rows),
        None => println!("No trending data yet."),
    }
}

fn print_trend_rows(rows: &[TrendingRow]) {
    if rows.is_empty() {
        println!("No searches in this window.");
        return;
    }

    for (rank, row) in rows.iter().enumerate() {
        println!("  {:>2}. {} - {} searches", rank + 1, row.keyword, row.count);
    }
}

async fn review_entry(api: &PortalApi, logs_feed: &Arc<Mutex<FeedState<Vec<LogRow>>>>, id: &str) {
    if id.is_empty() {
        println!("Usage: review <log-id>");
        return;
    }

    // Catalog hits are not reviewable; skip the round trip when the feed
    // already knows the entry is a hit
    let known_hit = {
        let feed = logs_feed.lock().await;
        feed.latest()
            .and_then(|rows| rows.iter().find(|row| row.id == id))
            .map(|row| row.found_in_catalog)
    };
    if known_hit == Some(true) {
        println!("That entry was found in the catalog; only external misses can be reviewed.");
        return;
    }

    match api.review(id).await {
        Ok(row) => println!("Marked {:?} as reviewed.", row.keyword),
        Err(e) => println!("Review failed: {}", e),
    }
}

async fn save_report(api: &PortalApi, rest: &str) {
    let mut words = rest.split_whitespace();
    let timeframe = words.next().unwrap_or("alltime");
    let default_path = format!("trending_report_{}.pdf", timeframe);
    let path = words.next().unwrap_or(&default_path);

    match api.report(timeframe).await {
        Ok(bytes) => match std::fs::write(path, &bytes) {
            Ok(()) => println!("Saved {} byte report to {}", bytes.len(), path),
            Err(e) => println!("Could not write {}: {}", path, e),
        },
        Err(e) => println!("Report failed: {}", e),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <keyword>                  search the catalog");
    println!("  search <keyword>           same, explicit form");
    println!("  use                        search the suggested keyword");
    println!("  logs                       show the latest search log snapshot");
    println!("  trends [timeframe]         show trending keywords (alltime, month, year)");
    println!("  review <log-id>            mark an external miss as reviewed");
    println!("  delete <log-id>            delete a log entry");
    println!("  report [timeframe] [path]  save a PDF trending report");
    println!("  quit                       leave the console");
}
