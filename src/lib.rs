pub mod config;
pub mod display;
pub mod error;
pub mod leaderboard;
pub mod leaderboard_client;
pub mod logger;
pub mod profanity;

pub use display::{badge_class, format_points, VerificationState};
pub use leaderboard::LeaderboardEntry;
pub use profanity::{ProfanityFilter, WordListFilter};
