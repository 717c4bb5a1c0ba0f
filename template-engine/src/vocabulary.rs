//! Curated vocabulary for well-known placeholder keys.
//!
//! Plain finite mappings covering the server/database/redis/application
//! settings that game server templates use in practice. Keys outside the
//! vocabulary fall back to a generated label (underscores to spaces, each
//! word capitalized) and an empty default.

/// Human-readable label for a placeholder key.
pub fn friendly_label(key: &str) -> String {
    let label = match key {
        "server_id" => "Server ID",
        "server_name" => "Server Name",
        "server_port" => "Game Port",
        "server_host" => "Server Host",
        "game_port" => "Game Port",
        "game_host" => "Game Server Host",
        "max_players" => "Max Players",
        "db_host" => "Database Host",
        "db_port" => "Database Port",
        "db_name" => "Database Name",
        "db_user" => "Database User",
        "db_password" => "Database Password",
        "redis_host" => "Redis Host",
        "redis_port" => "Redis Port",
        "redis_password" => "Redis Password",
        "app_name" => "Application Name",
        "app_version" => "Application Version",
        "debug" => "Debug Mode",
        "log_level" => "Log Level",
        "http_port" => "HTTP Port",
        "timezone" => "Time Zone",
        "language" => "Language",
        "api_key" => "API Key",
        "secret_key" => "Secret Key",
        _ => return fallback_label(key),
    };
    label.to_string()
}

/// Advisory default value for a placeholder key; empty for keys outside
/// the vocabulary. api_key and secret_key are deliberately defaultless.
pub fn default_value_for(key: &str) -> &'static str {
    match key {
        "server_id" => "server_001",
        "server_name" => "Test Realm",
        "server_port" => "8080",
        "server_host" => "localhost",
        "game_port" => "8080",
        "game_host" => "localhost",
        "max_players" => "1000",
        "db_host" => "localhost",
        "db_port" => "3306",
        "db_name" => "game_db",
        "db_user" => "root",
        "db_password" => "password",
        "redis_host" => "localhost",
        "redis_port" => "6379",
        "redis_password" => "",
        "app_name" => "Game Server",
        "app_version" => "1.0.0",
        "debug" => "false",
        "log_level" => "info",
        "http_port" => "80",
        "timezone" => "UTC",
        "language" => "en-US",
        _ => "",
    }
}

fn fallback_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
