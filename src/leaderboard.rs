use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::display::{format_count, format_points_in, NumberLocale};
use crate::error::EntryError;
use crate::profanity::ProfanityFilter;

/// One row of the points leaderboard as served by the leaderboard API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub points: f64,
    #[serde(default)]
    pub points_multiplier: Option<f64>,
    pub projects_funded_count: u64,
    pub wallet_address: String,
    pub rank: u32,
    #[serde(default)]
    pub username: Option<String>,
}

impl LeaderboardEntry {
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.id.trim().is_empty() {
            return Err(EntryError::MissingId);
        }
        if self.rank == 0 {
            return Err(EntryError::InvalidRank { id: self.id.clone(), rank: self.rank });
        }
        if self.points.is_nan() {
            return Err(EntryError::InvalidPoints { id: self.id.clone() });
        }
        if self.points_multiplier.is_some_and(|m| !m.is_finite()) {
            return Err(EntryError::InvalidMultiplier { id: self.id.clone() });
        }
        Ok(())
    }

    /// Name, then username, then a shortened wallet address.
    pub fn display_name(&self) -> String {
        let name = self.name.trim();
        if !name.is_empty() {
            return name.to_string();
        }

        match self.username.as_deref().map(str::trim) {
            Some(username) if !username.is_empty() => username.to_string(),
            _ => short_wallet(&self.wallet_address),
        }
    }

    pub fn formatted_points(&self, locale: &NumberLocale) -> String {
        format_points_in(self.points, locale)
    }
}

fn short_wallet(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub limit: usize,
    pub locale: NumberLocale,
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "🏆 Leaderboard".to_string(),
            limit: 10,
            locale: NumberLocale::default(),
            generated_at: None,
        }
    }
}

/// Renders entries in the order given. Ranks come from the entries themselves.
pub fn render_leaderboard(
    entries: &[LeaderboardEntry],
    options: &RenderOptions,
    filter: &dyn ProfanityFilter,
) -> String {
    let mut board = String::new();

    board.push_str(&options.title);
    if let Some(generated_at) = options.generated_at {
        board.push_str(&format!(" ({})", generated_at.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    board.push_str("\n\n");

    if options.limit == 0 {
        return board;
    }
    if entries.is_empty() {
        board.push_str("No one has earned points yet\n");
        return board;
    }

    let shown = &entries[..entries.len().min(options.limit)];
    for (i, entry) in shown.iter().enumerate() {
        let multiplier = match entry.points_multiplier {
            Some(m) => format!(" (x{})", m),
            None => String::new(),
        };

        board.push_str(&format!(
            "{}. **{}**\n• Points: {}{}\n• Projects Funded: {}\n",
            entry.rank,
            filter.clean(&entry.display_name()),
            entry.formatted_points(&options.locale),
            multiplier,
            format_count(entry.projects_funded_count, &options.locale)
        ));

        if i < shown.len() - 1 {
            board.push('\n');
        }
    }

    board
}
