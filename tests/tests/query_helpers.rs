use tests::books_db;

use tug::params;

use pretty_assertions::assert_eq;

#[tokio::test]
async fn execute_returns_affected_count() {
    let db = books_db().await;

    let count = db
        .execute(
            "UPDATE BOOKS SET PRICE = PRICE + 1 WHERE AUTHOR = ?",
            params!["Neal Stephenson"],
        )
        .await
        .unwrap();

    assert_eq!(count, 2);
}

#[tokio::test]
async fn execute_batch_counts_preserve_input_order() {
    let db = books_db().await;

    let counts = db
        .execute_batch(
            "UPDATE BOOKS SET PRICE = 0 WHERE AUTHOR = ?",
            &[
                vec!["Neal Stephenson".into()],
                vec!["Ursula K. Le Guin".into()],
                vec!["Nobody".into()],
            ],
        )
        .await
        .unwrap();

    assert_eq!(counts, [2, 1, 0]);
}

#[tokio::test]
async fn insert_returns_generated_key() {
    let db = books_db().await;

    let key = db
        .insert(
            "INSERT INTO BOOKS (TITLE, AUTHOR, PRICE) VALUES (?, ?, ?)",
            params!["Anathem", "Neal Stephenson", 14.0],
        )
        .await
        .unwrap();

    assert_eq!(key, 4);

    let title: Option<String> = db
        .fetch_scalar("SELECT TITLE FROM BOOKS WHERE ID = ?", params![key])
        .await
        .unwrap();
    assert_eq!(title.as_deref(), Some("Anathem"));
}

#[tokio::test]
async fn fetch_scalar() {
    let db = books_db().await;

    let count: Option<i64> = db
        .fetch_scalar("SELECT COUNT(*) FROM BOOKS", params![])
        .await
        .unwrap();
    assert_eq!(count, Some(3));

    // An empty result is absent, not an error.
    let missing: Option<i64> = db
        .fetch_scalar("SELECT ID FROM BOOKS WHERE ID = 99", params![])
        .await
        .unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn fetch_scalar_null_cell() {
    let db = books_db().await;

    // AVG over an empty set yields one row holding NULL; a bare numeric
    // scalar loads it as zero.
    let avg: Option<f64> = db
        .fetch_scalar("SELECT AVG(PRICE) FROM BOOKS WHERE 1 = 0", params![])
        .await
        .unwrap();
    assert_eq!(avg, Some(0.0));

    // An Option scalar lifts the NULL cell to None instead.
    let avg: Option<Option<f64>> = db
        .fetch_scalar("SELECT AVG(PRICE) FROM BOOKS WHERE 1 = 0", params![])
        .await
        .unwrap();
    assert_eq!(avg, Some(None));
}

#[tokio::test]
async fn fetch_column_reads_by_name() {
    let db = books_db().await;

    let titles: Vec<String> = db
        .fetch_column(
            "SELECT * FROM BOOKS WHERE AUTHOR = ? ORDER BY ID",
            "title",
            params!["Neal Stephenson"],
        )
        .await
        .unwrap();

    assert_eq!(titles, ["Cryptonomicon", "Snow Crash"]);
}

#[tokio::test]
async fn fetch_column_null_cells() {
    let db = books_db().await;
    db.execute(
        "INSERT INTO BOOKS (ID, TITLE, AUTHOR, PRICE) VALUES (4, NULL, 'Anon', 1.0)",
        params![],
    )
    .await
    .unwrap();

    let titles: Vec<String> = db
        .fetch_column("SELECT * FROM BOOKS ORDER BY ID", "TITLE", params![])
        .await
        .unwrap();
    assert_eq!(
        titles,
        ["Cryptonomicon", "Snow Crash", "The Dispossessed", ""]
    );

    let titles: Vec<Option<String>> = db
        .fetch_column("SELECT * FROM BOOKS ORDER BY ID", "TITLE", params![])
        .await
        .unwrap();
    assert_eq!(titles[3], None);
}

#[tokio::test]
async fn fetch_column_with_widening_coercion() {
    let db = books_db().await;

    // Stored as sqlite integers, requested as f64.
    let ids: Vec<f64> = db
        .fetch_column("SELECT ID FROM BOOKS ORDER BY ID", "ID", params![])
        .await
        .unwrap();

    assert_eq!(ids, [1.0, 2.0, 3.0]);
}

#[tokio::test]
async fn close_shuts_down_the_pool() {
    let db = books_db().await;
    db.close();

    let err = db
        .fetch_scalar::<i64>("SELECT COUNT(*) FROM BOOKS", params![])
        .await
        .unwrap_err();

    assert!(err.to_string().to_lowercase().contains("closed"));
}
