#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "tennis_stats.db".to_string(),
            max_connections: 8,
        }
    }
}

/// Row caps applied by the read endpoints.
#[derive(Debug, Clone)]
pub struct QueryLimits {
    pub forecasts: usize,
    pub search: usize,
    pub ranking: usize,
    pub titles: usize,
    pub entries: usize,
    pub h2h_seasons: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            forecasts: 100,
            search: 10,
            ranking: 200,
            titles: 100,
            entries: 100,
            h2h_seasons: 200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImportSettings {
    /// Ranking positions kept per snapshot date.
    pub ranking_depth: usize,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self { ranking_depth: 200 }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub attempts: usize,
    pub delay_ms: u64,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            user_agent: "CacheTestBot/1.0",
            timeout_secs: 30,
            attempts: 10,
            delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub limits: QueryLimits,
    pub import: ImportSettings,
    pub probe: ProbeSettings,
}

impl AppConfig {
    /// Defaults, with the database location taken from `DATABASE_PATH` when set.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            if !path.trim().is_empty() {
                config.database.path = path;
            }
        }
        config
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database.path = path.into();
        self
    }
}
