use anyhow::{Context, Result};
use subtitleathon::backend::BackendClient;
use subtitleathon::config::Config;
use subtitleathon::item::ArchivalItem;
use subtitleathon::policy::EventPolicy;
use subtitleathon::selector::{build_selector, fetch_event_page_data, SelectorView};
use subtitleathon::session::parse_session_cookie;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("subtitleathon=info".parse()?),
        )
        .init();

    info!("Starting subtitle-a-thon selector check");

    // Load configuration from environment
    let config = Config::from_env()?;

    let policy = EventPolicy::for_event(&config.event_id)
        .with_context(|| format!("unknown event '{}'", config.event_id))?;

    // Item metadata record to check, as a JSON file path argument
    let item_path = std::env::args()
        .nth(1)
        .context("usage: subtitleathon <item.json>")?;
    let item_json = std::fs::read_to_string(&item_path)
        .with_context(|| format!("failed to read {}", item_path))?;
    let item: ArchivalItem =
        serde_json::from_str(&item_json).context("failed to parse item metadata")?;

    let client = BackendClient::new(&config)?;

    // Step 1: the page-mount fetches
    info!("Fetching event data for {}", config.event_id);
    let page = fetch_event_page_data(&client, &config.event_id).await?;
    info!(
        "Event '{}': {} items, {} reservations, {} on leaderboard",
        page.info.name,
        page.statistics.items,
        page.statistics.reservations,
        page.leaderboard.len()
    );

    // Step 2: reservations for this item (kept as a Result: a failure must
    // collapse to the login message, not abort)
    let reservations = client.reserved_subtitles(&config.event_id, &item).await;

    // Step 3: build the option list
    let session = config
        .session_cookie
        .as_deref()
        .and_then(parse_session_cookie);
    let view = build_selector(
        policy,
        &item,
        &page.allowed_languages,
        reservations,
        session.as_ref(),
    );

    match view {
        SelectorView::LoginRequired => println!("Login to subtitle"),
        SelectorView::Options(options) => {
            for option in options {
                let state = if option.disabled {
                    if option.own {
                        "reserved (by you)"
                    } else {
                        "reserved"
                    }
                } else {
                    "available"
                };
                println!("{} ({}): {}", option.entry.name, option.entry.iso, state);
            }
        }
    }

    Ok(())
}
