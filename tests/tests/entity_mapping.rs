use tests::{books_db, connect};

use tug::{params, Entity};

use pretty_assertions::assert_eq;

#[derive(Debug, Default, PartialEq, Entity)]
struct Book {
    id: i64,
    title: String,
    author: String,
    price: f64,
}

#[tokio::test]
async fn maps_every_matching_field() {
    let db = books_db().await;

    let book: Option<Book> = db
        .fetch_one("SELECT * FROM BOOKS WHERE ID = ?", params![1i64])
        .await
        .unwrap();

    assert_eq!(
        book,
        Some(Book {
            id: 1,
            title: "Cryptonomicon".to_string(),
            author: "Neal Stephenson".to_string(),
            price: 12.5,
        })
    );
}

#[tokio::test]
async fn preserves_row_order() {
    let db = books_db().await;

    let books: Vec<Book> = db
        .fetch_all("SELECT * FROM BOOKS ORDER BY ID", params![])
        .await
        .unwrap();

    let titles: Vec<&str> = books.iter().map(|book| book.title.as_str()).collect();
    assert_eq!(titles, ["Cryptonomicon", "Snow Crash", "The Dispossessed"]);
}

#[tokio::test]
async fn empty_result() {
    let db = books_db().await;

    let books: Vec<Book> = db
        .fetch_all("SELECT * FROM BOOKS WHERE ID = ?", params![99i64])
        .await
        .unwrap();
    assert!(books.is_empty());

    let book: Option<Book> = db
        .fetch_one("SELECT * FROM BOOKS WHERE ID = ?", params![99i64])
        .await
        .unwrap();
    assert_eq!(book, None);
}

#[tokio::test]
async fn unmatched_column_is_ignored() {
    let db = books_db().await;

    let book: Option<Book> = db
        .fetch_one(
            "SELECT ID, TITLE, AUTHOR, PRICE, 42 AS EXTRA FROM BOOKS WHERE ID = 1",
            params![],
        )
        .await
        .unwrap();

    assert_eq!(book.unwrap().title, "Cryptonomicon");
}

#[tokio::test]
async fn unmatched_field_keeps_default() {
    let db = books_db().await;

    let book: Option<Book> = db
        .fetch_one("SELECT ID FROM BOOKS WHERE ID = 2", params![])
        .await
        .unwrap();

    assert_eq!(
        book,
        Some(Book {
            id: 2,
            ..Book::default()
        })
    );
}

#[tokio::test]
async fn column_match_is_case_insensitive() {
    let db = books_db().await;

    // Lowercase result columns still match the derived upper-snake names.
    let book: Option<Book> = db
        .fetch_one(
            "SELECT ID AS id, TITLE AS title FROM BOOKS WHERE ID = 3",
            params![],
        )
        .await
        .unwrap();

    assert_eq!(book.unwrap().title, "The Dispossessed");
}

#[tokio::test]
async fn field_named_like_its_column() {
    #[derive(Debug, Default, PartialEq, Entity)]
    struct Spotfix {
        spotfix_id: i64,
    }

    let db = connect().await;
    db.execute("CREATE TABLE SPOTFIXES (spotfix_id INTEGER)", params![])
        .await
        .unwrap();
    db.execute("INSERT INTO SPOTFIXES (spotfix_id) VALUES (?)", params![87i64])
        .await
        .unwrap();

    let fixes: Vec<Spotfix> = db
        .fetch_all("SELECT * FROM SPOTFIXES", params![])
        .await
        .unwrap();

    assert_eq!(fixes, [Spotfix { spotfix_id: 87 }]);
}

#[tokio::test]
async fn column_override_beats_derived_name() {
    #[derive(Debug, Default, PartialEq, Entity)]
    struct Translated {
        #[column("TITEL")]
        title: String,
    }

    let db = connect().await;
    db.execute("CREATE TABLE UEBERSETZUNGEN (TITEL TEXT, TITLE TEXT)", params![])
        .await
        .unwrap();
    db.execute(
        "INSERT INTO UEBERSETZUNGEN (TITEL, TITLE) VALUES (?, ?)",
        params!["Die Tugend", "The Virtue"],
    )
    .await
    .unwrap();

    // Both TITEL and TITLE are present; the override must win.
    let row: Option<Translated> = db
        .fetch_one("SELECT * FROM UEBERSETZUNGEN", params![])
        .await
        .unwrap();

    assert_eq!(row.unwrap().title, "Die Tugend");
}

#[tokio::test]
async fn null_handling() {
    #[derive(Debug, Default, PartialEq, Entity)]
    struct Sparse {
        id: i64,
        rating: Option<i64>,
        title: String,
    }

    let db = connect().await;
    db.execute(
        "CREATE TABLE SPARSE (ID INTEGER, RATING INTEGER, TITLE TEXT)",
        params![],
    )
    .await
    .unwrap();
    db.execute(
        "INSERT INTO SPARSE (ID, RATING, TITLE) VALUES (?, ?, ?)",
        params![1i64, None::<i64>, None::<String>],
    )
    .await
    .unwrap();

    let row: Sparse = db
        .fetch_one("SELECT * FROM SPARSE", params![])
        .await
        .unwrap()
        .unwrap();

    // Null lifts to None for Option fields and leaves plain fields at their
    // default value.
    assert_eq!(
        row,
        Sparse {
            id: 1,
            rating: None,
            title: String::new(),
        }
    );
}

#[tokio::test]
async fn integer_zero_one_maps_to_bool() {
    #[derive(Debug, Default, PartialEq, Entity)]
    struct Flag {
        id: i64,
        enabled: bool,
    }

    let db = connect().await;
    db.execute("CREATE TABLE FLAGS (ID INTEGER, ENABLED INTEGER)", params![])
        .await
        .unwrap();
    db.execute(
        "INSERT INTO FLAGS (ID, ENABLED) VALUES (1, 0), (2, 1)",
        params![],
    )
    .await
    .unwrap();

    let flags: Vec<Flag> = db
        .fetch_all("SELECT * FROM FLAGS ORDER BY ID", params![])
        .await
        .unwrap();

    assert_eq!(
        flags,
        [
            Flag {
                id: 1,
                enabled: false
            },
            Flag {
                id: 2,
                enabled: true
            },
        ]
    );
}

#[tokio::test]
async fn coercion_failure_aborts_the_query() {
    #[derive(Debug, Default, PartialEq, Entity)]
    struct Strict {
        id: i64,
        title: String,
    }

    let db = connect().await;
    db.execute("CREATE TABLE RAW (ID INTEGER, TITLE TEXT)", params![])
        .await
        .unwrap();
    db.execute(
        "INSERT INTO RAW (ID, TITLE) VALUES (1, 'fine'), ('not an id', 'bad')",
        params![],
    )
    .await
    .unwrap();

    let err = db
        .fetch_all::<Strict>("SELECT * FROM RAW", params![])
        .await
        .unwrap_err();

    assert!(err.is_mapping());
    assert_eq!(
        err.to_string(),
        "cannot map column `ID` to field `Strict.id`: column value is String, field expects i64: cannot convert String to i64"
    );
}
