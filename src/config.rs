use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use crate::display::NumberLocale;
use crate::error::ConfigError;

const DEFAULT_LIMIT: usize = 10;
const DEFAULT_REFRESH_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Config {
    pub leaderboard_url: String,
    pub leaderboard_limit: usize,
    pub refresh_interval: Duration,
    pub locale: NumberLocale,
    pub watch: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let leaderboard_url = lookup("LEADERBOARD_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("LEADERBOARD_URL"))?;

        let leaderboard_limit = parse_or(&lookup, "LEADERBOARD_LIMIT", DEFAULT_LIMIT)?;
        let refresh_secs: u64 = parse_or(&lookup, "LEADERBOARD_REFRESH_SECS", DEFAULT_REFRESH_SECS)?;
        if refresh_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "LEADERBOARD_REFRESH_SECS",
                value: "0".to_string(),
            });
        }

        let locale = match lookup("DISPLAY_LOCALE") {
            Some(tag) => tag.parse::<NumberLocale>()?,
            None => NumberLocale::default(),
        };

        let watch = parse_or(&lookup, "LEADERBOARD_WATCH", false)?;

        Ok(Self {
            leaderboard_url,
            leaderboard_limit,
            refresh_interval: Duration::from_secs(refresh_secs),
            locale,
            watch,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => {
            info!("{} not set, using default", key);
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[("LEADERBOARD_URL", "https://api.example.com/leaderboard")])).unwrap();
        assert_eq!(config.leaderboard_url, "https://api.example.com/leaderboard");
        assert_eq!(config.leaderboard_limit, 10);
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
        assert_eq!(config.locale, NumberLocale::EN_US);
        assert!(!config.watch);
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("LEADERBOARD_URL", "http://localhost:3000/api/leaderboard"),
            ("LEADERBOARD_LIMIT", "25"),
            ("LEADERBOARD_REFRESH_SECS", "60"),
            ("DISPLAY_LOCALE", "de_DE"),
            ("LEADERBOARD_WATCH", "true"),
        ]))
        .unwrap();
        assert_eq!(config.leaderboard_limit, 25);
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.locale, NumberLocale::DE_DE);
        assert!(config.watch);
    }

    #[test]
    fn missing_url() {
        assert_eq!(
            Config::from_lookup(lookup(&[])).unwrap_err(),
            ConfigError::Missing("LEADERBOARD_URL")
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("LEADERBOARD_URL", "  ")])).unwrap_err(),
            ConfigError::Missing("LEADERBOARD_URL")
        );
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_lookup(lookup(&[
            ("LEADERBOARD_URL", "http://x"),
            ("LEADERBOARD_LIMIT", "ten"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid { key: "LEADERBOARD_LIMIT", value: "ten".to_string() });

        let err = Config::from_lookup(lookup(&[
            ("LEADERBOARD_URL", "http://x"),
            ("LEADERBOARD_REFRESH_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "LEADERBOARD_REFRESH_SECS", .. }));

        let err = Config::from_lookup(lookup(&[
            ("LEADERBOARD_URL", "http://x"),
            ("DISPLAY_LOCALE", "tlh"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Locale(_)));
    }
}
