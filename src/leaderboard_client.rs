use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use crate::config::Config;
use crate::leaderboard::LeaderboardEntry;
use crate::logger::log_action;

const USER_AGENT: &str = "Fundboard Leaderboard/1.0";

pub struct LeaderboardClient {
    url: String,
    entries: Arc<RwLock<Vec<LeaderboardEntry>>>,
    client: reqwest::Client,
}

impl LeaderboardClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            url: config.leaderboard_url.clone(),
            entries: Arc::new(RwLock::new(Vec::new())),
            client,
        })
    }

    async fn fetch_entries(&self) -> Result<Vec<Value>> {
        debug!("Fetching leaderboard from {}", self.url);
        let response = self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;

        info!("Got response with status: {}", response.status());
        let rows = response.json::<Vec<Value>>().await?;
        Ok(rows)
    }

    /// Fetches a fresh snapshot. On failure the previous snapshot is kept.
    pub async fn refresh(&self) -> Result<usize> {
        let rows = self.fetch_entries().await?;
        let kept = self.replace_entries(parse_rows(rows)).await;
        log_action("refresh", &format!("loaded {} leaderboard entries", kept));
        Ok(kept)
    }

    /// Validates `fetched`, drops invalid rows and swaps the snapshot.
    pub(crate) async fn replace_entries(&self, fetched: Vec<LeaderboardEntry>) -> usize {
        let total = fetched.len();
        let valid: Vec<LeaderboardEntry> = fetched
            .into_iter()
            .filter(|entry| match entry.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!("Skipping leaderboard entry: {}", e);
                    false
                }
            })
            .collect();

        if valid.len() < total {
            warn!("Dropped {} of {} leaderboard entries", total - valid.len(), total);
        }

        let kept = valid.len();
        *self.entries.write().await = valid;
        kept
    }

    pub async fn entries(&self) -> Vec<LeaderboardEntry> {
        self.entries.read().await.clone()
    }

    pub async fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        let entries = self.entries.read().await;
        entries.iter().take(n).cloned().collect()
    }
}

/// Deserializes each row on its own so one malformed row only costs itself.
pub(crate) fn parse_rows(rows: Vec<Value>) -> Vec<LeaderboardEntry> {
    let total = rows.len();
    let parsed: Vec<LeaderboardEntry> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| match serde_json::from_value::<LeaderboardEntry>(row) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping malformed leaderboard row #{}: {}", i + 1, e);
                None
            }
        })
        .collect();

    if parsed.len() < total {
        warn!("Could not parse {} of {} leaderboard rows", total - parsed.len(), total);
    }

    parsed
}
