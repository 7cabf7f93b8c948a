use tests::connect;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tug::{params, Entity};

use pretty_assertions::assert_eq;

// SQLite stores date/time columns as text; the driver writes the canonical
// encodings and the scalar conversions parse them back.

#[derive(Debug, Default, PartialEq, Entity)]
struct Event {
    id: i64,
    starts_at: Option<NaiveDateTime>,
    day: Option<NaiveDate>,
}

#[tokio::test]
async fn naive_date_time_round_trip() {
    let db = connect().await;
    db.execute(
        "CREATE TABLE EVENTS (ID INTEGER, STARTS_AT TEXT, DAY TEXT)",
        params![],
    )
    .await
    .unwrap();

    let starts_at: NaiveDateTime = NaiveDate::from_ymd_opt(2015, 9, 18)
        .unwrap()
        .and_hms_opt(23, 56, 4)
        .unwrap();
    let day = starts_at.date();

    db.execute(
        "INSERT INTO EVENTS (ID, STARTS_AT, DAY) VALUES (?, ?, ?)",
        params![1i64, starts_at, day],
    )
    .await
    .unwrap();

    let event: Event = db
        .fetch_one("SELECT * FROM EVENTS", params![])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        event,
        Event {
            id: 1,
            starts_at: Some(starts_at),
            day: Some(day),
        }
    );
}

#[tokio::test]
async fn utc_timestamp_round_trip() {
    let db = connect().await;
    db.execute("CREATE TABLE PINGS (AT TEXT)", params![])
        .await
        .unwrap();

    let at: DateTime<Utc> = "2015-09-18T23:56:04Z".parse().unwrap();
    db.execute("INSERT INTO PINGS (AT) VALUES (?)", params![at])
        .await
        .unwrap();

    let fetched: Option<DateTime<Utc>> = db
        .fetch_scalar("SELECT AT FROM PINGS", params![])
        .await
        .unwrap();
    assert_eq!(fetched, Some(at));
}

#[tokio::test]
async fn null_date_time_is_absent() {
    let db = connect().await;
    db.execute(
        "CREATE TABLE EVENTS (ID INTEGER, STARTS_AT TEXT, DAY TEXT)",
        params![],
    )
    .await
    .unwrap();
    db.execute("INSERT INTO EVENTS (ID) VALUES (1)", params![])
        .await
        .unwrap();

    let event: Event = db
        .fetch_one("SELECT * FROM EVENTS", params![])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(event.starts_at, None);
    assert_eq!(event.day, None);
}
