use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Logs an action to the audit target
pub fn log_action(action_type: &str, details: &str) -> String {
    let line = format_action(chrono::Utc::now(), action_type, details);
    tracing::info!(target: "fundboard::audit", "{}", line);
    line
}

fn format_action(at: chrono::DateTime<chrono::Utc>, action_type: &str, details: &str) -> String {
    format!(
        "[{}] {}: {}",
        at.format("%Y-%m-%d %H:%M:%S UTC"),
        action_type,
        details
    )
}
