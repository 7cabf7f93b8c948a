//! Shared harness for the integration tests: tracing setup and a seeded
//! in-memory SQLite database.

use tug::{params, Db};

use std::sync::Once;

/// Installs the tracing subscriber once per process, honoring `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Connects to a fresh in-memory SQLite database.
pub async fn connect() -> Db {
    init_tracing();
    Db::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should connect")
}

/// Connects and creates the `BOOKS` table, seeded with three rows.
pub async fn books_db() -> Db {
    let db = connect().await;

    db.execute(
        "CREATE TABLE BOOKS (ID INTEGER PRIMARY KEY, TITLE TEXT, AUTHOR TEXT, PRICE REAL)",
        params![],
    )
    .await
    .expect("create table");

    for (id, title, author, price) in [
        (1i64, "Cryptonomicon", "Neal Stephenson", 12.5),
        (2, "Snow Crash", "Neal Stephenson", 8.99),
        (3, "The Dispossessed", "Ursula K. Le Guin", 9.99),
    ] {
        db.execute(
            "INSERT INTO BOOKS (ID, TITLE, AUTHOR, PRICE) VALUES (?, ?, ?, ?)",
            params![id, title, author, price],
        )
        .await
        .expect("seed row");
    }

    db
}
