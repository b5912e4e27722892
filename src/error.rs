use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntryError {
    #[error("Leaderboard entry has no id")]
    MissingId,

    #[error("Leaderboard entry {id} has invalid rank {rank}")]
    InvalidRank { id: String, rank: u32 },

    #[error("Leaderboard entry {id} has non-numeric points")]
    InvalidPoints { id: String },

    #[error("Leaderboard entry {id} has non-finite points multiplier")]
    InvalidMultiplier { id: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unknown display locale: {0:?}")]
    Unknown(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error(transparent)]
    Locale(#[from] LocaleError),
}
