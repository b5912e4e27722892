use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};
use fundboard::config::Config;
use fundboard::leaderboard::{render_leaderboard, RenderOptions};
use fundboard::leaderboard_client::LeaderboardClient;
use fundboard::logger;
use fundboard::profanity::WordListFilter;

async fn print_board(client: &LeaderboardClient, config: &Config, filter: &WordListFilter) {
    let entries = client.top(config.leaderboard_limit).await;
    let options = RenderOptions {
        limit: config.leaderboard_limit,
        locale: config.locale,
        generated_at: Some(chrono::Utc::now()),
        ..RenderOptions::default()
    };
    println!("{}", render_leaderboard(&entries, &options, filter));
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine, the variables may come from the environment
    dotenv().ok();

    logger::init();

    info!("Starting fundboard...");

    let config = Config::from_env()?;
    info!("Using {} for leaderboard display", config.locale);

    let client = LeaderboardClient::new(&config)?;
    let filter = WordListFilter::new();

    client.refresh().await?;
    print_board(&client, &config, &filter).await;

    if !config.watch {
        return Ok(());
    }

    loop {
        tokio::time::sleep(config.refresh_interval).await;
        match client.refresh().await {
            Ok(_) => print_board(&client, &config, &filter).await,
            Err(e) => error!("Failed to refresh leaderboard: {}", e),
        }
    }
}
