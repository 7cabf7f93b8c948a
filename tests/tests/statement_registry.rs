use tests::init_tracing;

use tug::{params, Db};

use pretty_assertions::assert_eq;

#[tokio::test]
async fn statements_resolve_through_the_registry() {
    init_tracing();

    let db = Db::builder()
        .statement("ping", "SELECT 1")
        .statement("answer", "SELECT 42")
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let sql = db.statement("answer").unwrap().to_string();
    let answer: Option<i64> = db.fetch_scalar(&sql, params![]).await.unwrap();
    assert_eq!(answer, Some(42));

    assert_eq!(
        db.statements().keys().collect::<Vec<_>>(),
        ["ping", "answer"]
    );
}

#[tokio::test]
async fn missing_statement_fails_with_its_key() {
    init_tracing();

    let db = Db::connect("sqlite::memory:").await.unwrap();

    let err = db.statement("books.select_all").unwrap_err();
    assert!(err.is_statement_not_found());
    assert_eq!(
        err.to_string(),
        "sql statement not found: `books.select_all`"
    );
}

#[tokio::test]
async fn statement_files_load_after_inline_statements() {
    init_tracing();

    let path = std::env::temp_dir().join("tug-registry-test-statements.toml");
    std::fs::write(
        &path,
        r#"
        ping = "SELECT 2"

        [books]
        count = "SELECT COUNT(*) FROM BOOKS"
        "#,
    )
    .unwrap();

    let db = Db::builder()
        .statement("ping", "SELECT 1")
        .statements_file(&path)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    // The file's key overrides the inline registration.
    assert_eq!(db.statement("ping").unwrap(), "SELECT 2");
    assert_eq!(
        db.statement("books.count").unwrap(),
        "SELECT COUNT(*) FROM BOOKS"
    );

    std::fs::remove_file(&path).unwrap();
}
