use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

use tennis_stats::api::AppState;
use tennis_stats::config::AppConfig;
use tennis_stats::database::{self, setup::ensure_schema, Match, Player, RankingTableRow, Tournament};
use tennis_stats::services::build_app;

pub struct TestServer {
    pub base: String,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
    db_path: PathBuf,
}

impl TestServer {
    /// Serves a freshly seeded database on an ephemeral port.
    pub async fn start(name: &str) -> Self {
        let db_path = std::env::temp_dir().join(format!("tennis_stats_{}_{}.db", std::process::id(), name));
        let _ = std::fs::remove_file(&db_path);

        let config = AppConfig::default().with_database_path(db_path.to_string_lossy());
        let pool = database::create_pool(&config.database.path, 4).unwrap();
        {
            let conn = database::get_connection(&pool).unwrap();
            ensure_schema(&conn).unwrap();
            seed(&conn);
        }

        let app = build_app(Arc::new(AppState::new(pool, config)));
        let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = rx.await;
                })
                .await;
        });

        Self {
            base: format!("http://{addr}"),
            shutdown: Some(tx),
            handle: Some(handle),
            db_path,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        let _ = std::fs::remove_file(&self.db_path);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn player(id: &str, name: &str, ioc: &str) -> Player {
    Player {
        id: id.to_string(),
        player: Some(name.to_string()),
        atpname: Some(name.to_string()),
        coaches: None,
        ioc: Some(ioc.to_string()),
        hand: Some("R".to_string()),
        backhand: None,
        birthdate: None,
        birthplace: None,
        height: None,
        weight: None,
        turnedpro: None,
    }
}

struct Played<'a> {
    tourney_id: &'a str,
    tourney_name: &'a str,
    surface: &'a str,
    date: NaiveDate,
    winner: (&'a str, &'a str),
    loser: (&'a str, &'a str),
    score: &'a str,
    round: &'a str,
    status: bool,
}

fn match_row(p: Played) -> Match {
    let year = chrono::Datelike::year(&p.date);
    Match {
        id: 0,
        tourney_id: p.tourney_id.to_string(),
        tourney_name: Some(p.tourney_name.to_string()),
        surface: Some(p.surface.to_string()),
        draw_size: Some(128),
        tourney_level: Some("G".to_string()),
        tourney_date: Some(p.date),
        year: Some(year),
        event_id: Some(format!("{year}-{}", p.tourney_id)),
        match_num: None,
        winner_id: p.winner.0.to_string(),
        winner_seed: None,
        winner_entry: None,
        winner_name: Some(p.winner.1.to_string()),
        winner_hand: None,
        winner_ht: None,
        winner_ioc: None,
        winner_age: None,
        winner_rank: None,
        winner_rank_points: None,
        loser_id: p.loser.0.to_string(),
        loser_seed: None,
        loser_entry: None,
        loser_name: Some(p.loser.1.to_string()),
        loser_hand: None,
        loser_ht: None,
        loser_ioc: None,
        loser_age: None,
        loser_rank: None,
        loser_rank_points: None,
        score: Some(p.score.to_string()),
        best_of: Some(5),
        round: Some(p.round.to_string()),
        minutes: None,
        status: p.status,
        team_event: false,
    }
}

fn tournament(id: i64, name: &str, category: &str) -> Tournament {
    Tournament {
        id,
        name: name.to_string(),
        slug: None,
        city: None,
        country: None,
        ioc: None,
        category: Some(category.to_string()),
        surfaces: vec!["Hard".to_string()],
        indoor: Some(false),
        website: None,
    }
}

fn seed(conn: &Connection) {
    let federer = ("C044", "Roger Federer");
    let nadal = ("A678", "Rafael Nadal");
    let djokovic = ("D643", "Novak Djokovic");

    database::players::insert_player(conn, &player("C044", "Roger Federer", "SUI")).unwrap();
    database::players::insert_player(conn, &player("A678", "Rafael Nadal", "ESP")).unwrap();
    database::players::insert_player(conn, &player("D643", "Novak Djokovic", "SRB")).unwrap();
    database::players::insert_player(conn, &player("R0F1", "Édouard Roger-Vasselin", "FRA")).unwrap();
    for n in 1..=12 {
        database::players::insert_player(conn, &player(&format!("F{n:03}"), &format!("Federico Test{n}"), "ITA"))
            .unwrap();
    }

    let ao_2024 = date(2024, 1, 15);
    let rows = [
        Played { tourney_id: "580", tourney_name: "Australian Open", surface: "Hard", date: ao_2024, winner: federer, loser: djokovic, score: "6-4 6-4 6-4", round: "R32", status: true },
        Played { tourney_id: "580", tourney_name: "Australian Open", surface: "Hard", date: ao_2024, winner: federer, loser: nadal, score: "7-6 6-3 6-2", round: "F", status: true },
        Played { tourney_id: "580", tourney_name: "Australian Open", surface: "Hard", date: ao_2024, winner: nadal, loser: djokovic, score: "W/O", round: "SF", status: false },
        Played { tourney_id: "580", tourney_name: "Australian Open", surface: "Hard", date: ao_2024, winner: federer, loser: nadal, score: "6-0 6-0", round: "RR", status: true },
        Played { tourney_id: "580", tourney_name: "Australian Open", surface: "Hard", date: date(2023, 1, 16), winner: nadal, loser: federer, score: "6-4 WEA", round: "F", status: true },
        Played { tourney_id: "581", tourney_name: "Australian Open-2", surface: "Grass", date: date(1977, 12, 19), winner: djokovic, loser: nadal, score: "6-3 6-3 6-3", round: "F", status: true },
        Played { tourney_id: "540", tourney_name: "Wimbledon", surface: "Grass", date: date(2023, 6, 26), winner: federer, loser: nadal, score: "6-3 DEF", round: "R16", status: false },
    ];
    for row in rows {
        database::matches::insert_match(conn, &match_row(row)).unwrap();
    }

    let snapshots = [
        (date(2024, 1, 1), ["C044", "A678", "D643"]),
        (date(2024, 1, 8), ["A678", "C044", "D643"]),
        (date(2024, 1, 15), ["A678", "D643", "C044"]),
    ];
    for (day, order) in snapshots {
        let date_id = database::rankings::upsert_ranking_date(conn, day).unwrap();
        for (idx, player_id) in order.iter().enumerate() {
            let rank = idx as i32 + 1;
            database::rankings::insert_ranking(conn, date_id, player_id, rank, 10_000 - rank * 1_000).unwrap();
        }
    }

    database::tournaments::insert_tournament(conn, &tournament(580, "Australian Open", "G")).unwrap();
    database::tournaments::insert_tournament(conn, &tournament(540, "Wimbledon", "G")).unwrap();
    database::tournaments::insert_tournament(conn, &tournament(581, "Australian Open-2", "G")).unwrap();
    database::tournaments::insert_tournament(conn, &tournament(339, "Brisbane", "A")).unwrap();

    for (tournament, start) in [("Australian Open", "2024-01-15"), ("Brisbane", "2024-01-01")] {
        let row = RankingTableRow {
            year: "2024".to_string(),
            tournament: tournament.to_string(),
            tourney_id: None,
            tourney_date: Some(start.to_string()),
            prize_money: Some("$1.000".to_string()),
            atp_category: Some("250".to_string()),
        };
        database::records::insert_ranking_table_row(conn, &row).unwrap();
    }
}
