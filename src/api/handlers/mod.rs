use anyhow::Context;
use rusqlite::Connection;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::config::settings::AppConfig;
use crate::database::{self, DbPool};

pub mod h2h;
pub mod matches;
pub mod players;
pub mod ranking;
pub mod records;
pub mod records_ranking;
pub mod seasons;
pub mod tournaments;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self { pool, config }
    }

    /// Runs blocking database work on the blocking thread pool with a pooled
    /// connection.
    pub async fn with_connection<T, F>(self: &Arc<Self>, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Connection, &AppConfig) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let state = Arc::clone(self);
        let result = tokio::task::spawn_blocking(move || {
            let conn = database::get_connection(&state.pool)?;
            f(&*conn, &state.config)
        })
        .await
        .context("Database task failed")?;

        Ok(result?)
    }
}

#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerMatchParams {
    pub player_id: Option<String>,
    pub round: Option<String>,
    pub surface: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpponentParams {
    pub player: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HeadToHeadParams {
    pub player1: Option<String>,
    pub player2: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RankingParams {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct YearParams {
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StreakParams {
    pub player_id: Option<String>,
    pub event_ids: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RankParams {
    pub rank: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopParams {
    pub top: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchSearchParams {
    pub id: Option<String>,
    pub player1: Option<String>,
    pub player2: Option<String>,
    pub opponent: Option<String>,
    pub year: Option<String>,
    pub level: Option<String>,
    pub surface: Option<String>,
    pub round: Option<String>,
    pub tourney: Option<String>,
    pub sort: Option<String>,
    #[serde(rename = "sortDir")]
    pub sort_dir: Option<String>,
}
