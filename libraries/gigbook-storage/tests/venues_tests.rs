//! Integration tests for the venues vertical slice
//!
//! Tests venue operations including:
//! - Grouped listing with upcoming show counts
//! - Case-insensitive search
//! - Detail pages with past/upcoming partitions
//! - Full-replace updates and atomic deletes


use gigbook_core::GigError;
use gigbook_storage::venues;
use test_helpers::*;

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_venues_in_same_city_share_one_area() {
    let test_db = TestDb::new().await;
    create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(
        &test_db,
        "Park Square Live Music & Coffee",
        "San Francisco",
        "CA",
    )
    .await;

    let mut session = test_db.session().await;
    let areas = venues::list_by_area(&mut session, reference_now())
        .await
        .expect("Failed to list venues");

    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].city, "San Francisco");
    assert_eq!(areas[0].state, "CA");
    assert_eq!(areas[0].venues.len(), 2);
}

#[tokio::test]
async fn test_listing_counts_only_upcoming_shows() {
    let test_db = TestDb::new().await;
    let hop = create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;
    let bar = create_test_venue(&test_db, "The Dueling Pianos Bar", "New York", "NY").await;
    let artist = create_test_artist(&test_db, "Guns N Petals").await;

    create_test_show(&test_db, artist, hop, days_from_now(-3)).await;
    create_test_show(&test_db, artist, hop, days_from_now(2)).await;
    create_test_show(&test_db, artist, hop, days_from_now(9)).await;
    create_test_show(&test_db, artist, bar, reference_now()).await;

    let mut session = test_db.session().await;
    let areas = venues::list_by_area(&mut session, reference_now())
        .await
        .unwrap();

    let count_for = |id: i64| {
        areas
            .iter()
            .flat_map(|a| a.venues.iter())
            .find(|v| v.id == id)
            .map(|v| v.num_upcoming_shows)
            .unwrap()
    };
    assert_eq!(count_for(hop), 2);
    // Starting exactly now is not upcoming
    assert_eq!(count_for(bar), 0);
}

#[tokio::test]
async fn test_empty_database_lists_no_areas() {
    let test_db = TestDb::new().await;
    let mut session = test_db.session().await;
    let areas = venues::list_by_area(&mut session, reference_now())
        .await
        .unwrap();
    assert!(areas.is_empty());
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let test_db = TestDb::new().await;
    let mut session = test_db.session().await;
    let created = venues::create(
        &mut session,
        gigbook_core::CreateVenue {
            genres: vec!["Jazz".to_string(), "Reggae".to_string()],
            ..venue_payload("The Musical Hop", "San Francisco", "CA")
        },
    )
    .await
    .unwrap();
    session.commit().await.unwrap();
    create_test_venue(&test_db, "The Dueling Pianos Bar", "New York", "NY").await;

    let mut session = test_db.session().await;
    for term in ["Hop", "hop", "HOP"] {
        let results = venues::search(&mut session, term).await.unwrap();
        assert_eq!(results.count, 1, "term {term:?}");
        assert_eq!(results.data[0].id, created.id);
        assert_eq!(results.data[0].genres, vec!["Jazz", "Reggae"]);
    }
}

#[tokio::test]
async fn test_search_orders_by_name_and_empty_term_matches_all() {
    let test_db = TestDb::new().await;
    create_test_venue(
        &test_db,
        "Park Square Live Music & Coffee",
        "San Francisco",
        "CA",
    )
    .await;
    create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&test_db, "The Dueling Pianos Bar", "New York", "NY").await;

    let mut session = test_db.session().await;

    let music = venues::search(&mut session, "Music").await.unwrap();
    let names: Vec<&str> = music.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Park Square Live Music & Coffee", "The Musical Hop"]
    );

    let all = venues::search(&mut session, "").await.unwrap();
    assert_eq!(all.count, 3);
    assert_eq!(all.data.len(), 3);
}

#[tokio::test]
async fn test_search_orders_names_ignoring_case() {
    let test_db = TestDb::new().await;
    create_test_venue(&test_db, "Zed Bar", "Oakland", "CA").await;
    create_test_venue(&test_db, "the Hop", "Oakland", "CA").await;
    create_test_venue(&test_db, "Alley Bar", "Oakland", "CA").await;

    let mut session = test_db.session().await;
    let all = venues::search(&mut session, "").await.unwrap();
    let names: Vec<&str> = all.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Alley Bar", "the Hop", "Zed Bar"]);

    let areas = venues::list_by_area(&mut session, reference_now())
        .await
        .unwrap();
    let listed: Vec<&str> = areas[0].venues.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(listed, names);
}

#[tokio::test]
async fn test_search_treats_like_wildcards_literally() {
    let test_db = TestDb::new().await;
    create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;

    let mut session = test_db.session().await;
    assert_eq!(venues::search(&mut session, "%").await.unwrap().count, 0);
    assert_eq!(venues::search(&mut session, "_").await.unwrap().count, 0);
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn test_detail_without_shows_has_empty_partitions() {
    let test_db = TestDb::new().await;
    let id = create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;

    let mut session = test_db.session().await;
    let detail = venues::get_detail(&mut session, id, reference_now())
        .await
        .unwrap();

    assert_eq!(detail.venue.name, "The Musical Hop");
    assert!(detail.past_shows.is_empty());
    assert!(detail.upcoming_shows.is_empty());
    assert_eq!(detail.past_shows_count, 0);
    assert_eq!(detail.upcoming_shows_count, 0);
}

#[tokio::test]
async fn test_detail_partitions_shows_and_attaches_artist() {
    let test_db = TestDb::new().await;
    let venue = create_test_venue(
        &test_db,
        "Park Square Live Music & Coffee",
        "San Francisco",
        "CA",
    )
    .await;
    let artist = create_test_artist(&test_db, "The Wild Sax Band").await;

    create_test_show(&test_db, artist, venue, days_from_now(-30)).await;
    create_test_show(&test_db, artist, venue, reference_now()).await;
    create_test_show(&test_db, artist, venue, days_from_now(7)).await;

    let mut session = test_db.session().await;
    let detail = venues::get_detail(&mut session, venue, reference_now())
        .await
        .unwrap();

    assert_eq!(detail.past_shows_count, 2);
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.upcoming_shows[0].artist_name, "The Wild Sax Band");
    assert_eq!(detail.upcoming_shows[0].artist_id, artist);
    assert_eq!(detail.upcoming_shows[0].start_time, days_from_now(7));
    let past: Vec<_> = detail.past_shows.iter().map(|s| s.start_time).collect();
    assert!(past.contains(&reference_now()));
}

#[tokio::test]
async fn test_detail_of_missing_venue_is_not_found() {
    let test_db = TestDb::new().await;
    let mut session = test_db.session().await;

    let err = venues::get_detail(&mut session, 999, reference_now())
        .await
        .expect_err("missing venue should not resolve");
    assert!(err.is_not_found());
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_replaces_every_field() {
    let test_db = TestDb::new().await;
    let mut session = test_db.session().await;
    let original = venues::create(
        &mut session,
        gigbook_core::CreateVenue {
            phone: Some("123-123-1234".to_string()),
            seeking_talent: true,
            seeking_description: Some("Looking for bands".to_string()),
            ..venue_payload("The Musical Hop", "San Francisco", "CA")
        },
    )
    .await
    .unwrap();
    session.commit().await.unwrap();

    let mut session = test_db.session().await;
    let updated = venues::update(
        &mut session,
        original.id,
        venue_payload("The Musical Hop II", "Oakland", "CA"),
    )
    .await
    .unwrap();
    session.commit().await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "The Musical Hop II");
    assert_eq!(updated.city, "Oakland");
    // Fields absent from the new payload are cleared, not merged
    assert_eq!(updated.phone, None);
    assert!(!updated.seeking_talent);
    assert_eq!(updated.seeking_description, None);
}

#[tokio::test]
async fn test_update_missing_venue_fails_without_writing() {
    let test_db = TestDb::new().await;
    let mut session = test_db.session().await;

    let err = venues::update(&mut session, 42, venue_payload("Ghost", "Nowhere", "NA"))
        .await
        .expect_err("update of missing venue should fail");
    assert!(matches!(err, GigError::NotFound { .. }));
    drop(session);

    let mut session = test_db.session().await;
    assert!(venues::get_all(&mut session).await.unwrap().is_empty());
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_removes_venue_and_its_shows() {
    let test_db = TestDb::new().await;
    let venue = create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;
    let other = create_test_venue(&test_db, "The Dueling Pianos Bar", "New York", "NY").await;
    let artist = create_test_artist(&test_db, "Guns N Petals").await;

    for offset in [-2, 1, 5] {
        create_test_show(&test_db, artist, venue, days_from_now(offset)).await;
    }
    create_test_show(&test_db, artist, other, days_from_now(3)).await;

    let mut session = test_db.session().await;
    let removed = venues::delete(&mut session, venue).await.unwrap();
    session.commit().await.unwrap();

    assert_eq!(removed, 3);
    assert_eq!(show_count(&test_db).await, 1);

    let mut session = test_db.session().await;
    let gone = venues::get_by_id(&mut session, venue).await.unwrap();
    assert!(gone.is_none());
    let kept = venues::get_by_id(&mut session, other).await.unwrap();
    assert!(kept.is_some());
}

#[tokio::test]
async fn test_delete_missing_venue_is_not_found() {
    let test_db = TestDb::new().await;
    let mut session = test_db.session().await;
    let err = venues::delete(&mut session, 7).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_failed_venue_delete_leaves_everything_untouched() {
    let test_db = TestDb::new().await;
    let venue = create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&test_db, "Guns N Petals").await;
    for offset in [-1, 1, 2] {
        create_test_show(&test_db, artist, venue, days_from_now(offset)).await;
    }

    // Shows are deleted first, then the venue delete fails
    sqlx::query(
        "CREATE TRIGGER fail_venue_delete BEFORE DELETE ON venues
         BEGIN SELECT RAISE(ABORT, 'simulated failure'); END",
    )
    .execute(test_db.db.pool())
    .await
    .unwrap();

    let mut session = test_db.session().await;
    assert!(venues::delete(&mut session, venue).await.is_err());
    drop(session);

    assert_eq!(show_count(&test_db).await, 3);
    let mut session = test_db.session().await;
    let kept = venues::get_by_id(&mut session, venue).await.unwrap();
    assert!(kept.is_some());
}

#[tokio::test]
async fn test_failure_during_show_deletion_leaves_everything_untouched() {
    let test_db = TestDb::new().await;
    let venue = create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&test_db, "Guns N Petals").await;
    create_test_show(&test_db, artist, venue, days_from_now(-1)).await;
    let poisoned = create_test_show(&test_db, artist, venue, days_from_now(1)).await;
    create_test_show(&test_db, artist, venue, days_from_now(2)).await;

    sqlx::query(&format!(
        "CREATE TRIGGER fail_show_delete BEFORE DELETE ON shows
         WHEN OLD.id = {poisoned}
         BEGIN SELECT RAISE(ABORT, 'simulated failure'); END"
    ))
    .execute(test_db.db.pool())
    .await
    .unwrap();

    let mut session = test_db.session().await;
    assert!(venues::delete(&mut session, venue).await.is_err());
    drop(session);

    assert_eq!(show_count(&test_db).await, 3);
    let mut session = test_db.session().await;
    let kept = venues::get_by_id(&mut session, venue).await.unwrap();
    assert!(kept.is_some());
}

#[tokio::test]
async fn test_venue_with_shows_cannot_be_removed_directly() {
    let test_db = TestDb::new().await;
    let venue = create_test_venue(&test_db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&test_db, "Guns N Petals").await;
    create_test_show(&test_db, artist, venue, days_from_now(1)).await;

    // Foreign keys are enforced and do not cascade
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(venue)
        .execute(test_db.db.pool())
        .await;
    assert!(result.is_err());
}
