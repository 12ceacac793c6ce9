#[derive(Debug, Clone)]
pub struct StatsSettings {
    /// Leaderboard size when the caller does not ask for one
    pub top_reviewers_limit: usize,
    /// Review characters worth one quality point
    pub quality_chars_per_point: f64,
    /// Quality points a single review can earn at most
    pub quality_cap_per_review: f64,
    /// Share of a result set one category must hold to be named as context
    pub category_context_share: f64,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            top_reviewers_limit: 10,
            quality_chars_per_point: 20.0,
            quality_cap_per_review: 10.0,
            category_context_share: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub result_limit: usize,
    pub suggestion_limit: usize,
    pub max_comment_chars: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            result_limit: 8,
            suggestion_limit: 5,
            max_comment_chars: 500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
    pub export_dir: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "rateit.db".to_string()),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or_else(|_| "exports".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountSettings {
    /// When set, the `Admin` account is created with this password on startup
    pub admin_password: Option<String>,
}

impl AccountSettings {
    pub fn from_env() -> Self {
        Self {
            admin_password: std::env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub stats: StatsSettings,
    pub search: SearchSettings,
    pub storage: StorageSettings,
    pub accounts: AccountSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            stats: StatsSettings::default(),
            search: SearchSettings::default(),
            storage: StorageSettings::default(),
            accounts: AccountSettings::from_env(),
        }
    }
}
