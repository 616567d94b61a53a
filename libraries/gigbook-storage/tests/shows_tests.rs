//! Integration tests for the shows vertical slice


use gigbook_core::{CreateShow, GigError, ValidationError};
use gigbook_storage::{seed, shows};
use test_helpers::*;

#[tokio::test]
async fn test_create_show_with_unknown_artist_fails() {
    let test_db = TestDb::new().await;
    let venue = create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;

    let mut session = test_db.session().await;
    let err = shows::create(
        &mut session,
        CreateShow {
            artist_id: 999,
            venue_id: venue,
            start_time: days_from_now(1),
        },
    )
    .await
    .unwrap_err();
    drop(session);

    assert!(matches!(err, GigError::Validation(ValidationError::ArtistNotFound)));
    assert_eq!(err.to_string(), "Artist ID not found");
    assert_eq!(show_count(&test_db).await, 0);
}

#[tokio::test]
async fn test_create_show_with_unknown_venue_fails() {
    let test_db = TestDb::new().await;
    let artist = create_test_artist(&test_db, "Guns N Petals").await;

    let mut session = test_db.session().await;
    let err = shows::create(
        &mut session,
        CreateShow {
            artist_id: artist,
            venue_id: 999,
            start_time: days_from_now(1),
        },
    )
    .await
    .unwrap_err();
    drop(session);

    assert_eq!(err.to_string(), "Venue ID not found");
    assert_eq!(show_count(&test_db).await, 0);
}

#[tokio::test]
async fn test_artist_check_takes_precedence() {
    let test_db = TestDb::new().await;
    let mut session = test_db.session().await;
    let err = shows::create(
        &mut session,
        CreateShow {
            artist_id: 1,
            venue_id: 1,
            start_time: days_from_now(1),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, GigError::Validation(ValidationError::ArtistNotFound)));
}

#[tokio::test]
async fn test_create_and_fetch_show() {
    let test_db = TestDb::new().await;
    let artist = create_test_artist(&test_db, "Guns N Petals").await;
    let venue = create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;

    let id = create_test_show(&test_db, artist, venue, days_from_now(3)).await;

    let mut session = test_db.session().await;
    let show = shows::get_by_id(&mut session, id).await.unwrap().unwrap();
    assert_eq!(show.artist_id, artist);
    assert_eq!(show.venue_id, venue);
    assert_eq!(show.start_time, days_from_now(3));
}

#[tokio::test]
async fn test_rollback_discards_show() {
    let test_db = TestDb::new().await;
    let artist = create_test_artist(&test_db, "Matt Quevedo").await;
    let venue = create_test_venue(&test_db, "The Dueling Pianos Bar", "New York", "NY").await;

    let mut session = test_db.session().await;
    shows::create(
        &mut session,
        CreateShow {
            artist_id: artist,
            venue_id: venue,
            start_time: days_from_now(5),
        },
    )
    .await
    .unwrap();
    session.rollback().await.unwrap();

    assert_eq!(show_count(&test_db).await, 0);
}

/// Every check-then-insert runs in a write session. Deferred transactions
/// that read before writing fail with `SQLITE_BUSY` under contention instead
/// of waiting out the busy timeout.
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_write_sessions_all_commit() {
    let test_db = TestDb::new().await;
    let artist = create_test_artist(&test_db, "The Wild Sax Band").await;
    let venue = create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;

    let tasks: Vec<_> = (0..40)
        .map(|offset| {
            let db = test_db.db.clone();
            tokio::spawn(async move {
                let mut session = db.begin_write().await?;
                let show = shows::create(
                    &mut session,
                    CreateShow {
                        artist_id: artist,
                        venue_id: venue,
                        start_time: days_from_now(offset),
                    },
                )
                .await?;
                session.commit().await?;
                Ok::<_, GigError>(show.id)
            })
        })
        .collect();

    for task in tasks {
        let outcome = task.await.expect("Write task panicked");
        assert!(outcome.is_ok(), "write session failed: {outcome:?}");
    }
    assert_eq!(show_count(&test_db).await, 40);
}

#[tokio::test]
async fn test_list_joins_names_latest_first() {
    let test_db = TestDb::new().await;
    let petals = create_test_artist(&test_db, "Guns N Petals").await;
    let sax = create_test_artist(&test_db, "The Wild Sax Band").await;
    let hop = create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;
    let park = create_test_venue(
        &test_db,
        "Park Square Live Music & Coffee",
        "San Francisco",
        "CA",
    )
    .await;

    create_test_show(&test_db, petals, hop, days_from_now(-400)).await;
    create_test_show(&test_db, sax, park, days_from_now(10)).await;
    create_test_show(&test_db, sax, hop, days_from_now(2)).await;

    let mut session = test_db.session().await;
    let listed = shows::list(&mut session).await.unwrap();

    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].venue_name, "Park Square Live Music & Coffee");
    assert_eq!(listed[0].artist_name, "The Wild Sax Band");
    assert_eq!(listed[1].start_time, days_from_now(2));
    assert_eq!(listed[2].artist_name, "Guns N Petals");
    let times: Vec<_> = listed.iter().map(|s| s.start_time).collect();
    assert!(times.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_seed_loads_once() {
    let test_db = TestDb::new().await;

    let mut session = test_db.session().await;
    let report = seed::load_sample_data(&mut session).await.unwrap();
    session.commit().await.unwrap();
    assert_eq!(report.venues, 3);
    assert_eq!(report.artists, 3);
    assert_eq!(report.shows, 5);
    assert_eq!(show_count(&test_db).await, 5);

    let mut session = test_db.session().await;
    let again = seed::load_sample_data(&mut session).await.unwrap();
    session.commit().await.unwrap();
    assert_eq!(again, seed::SeedReport::default());
    assert_eq!(show_count(&test_db).await, 5);
}
