//! Sample venues, artists, and shows for a fresh database.

use chrono::{TimeZone, Utc};
use gigbook_core::{error::Result, types::*};

use crate::{artists, shows, venues, Session};

/// What a seeding run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub venues: usize,
    pub artists: usize,
    pub shows: usize,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Insert the sample data set unless the database already has venues.
///
/// Runs on the caller's session; nothing is visible until it commits.
pub async fn load_sample_data(session: &mut Session) -> Result<SeedReport> {
    if !venues::get_all(session).await?.is_empty() {
        tracing::info!("Database already has venues, skipping seed");
        return Ok(SeedReport::default());
    }

    let musical_hop = venues::create(
        session,
        CreateVenue {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: some("123-123-1234"),
            image_link: some("https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400"),
            facebook_link: some("https://www.facebook.com/TheMusicalHop"),
            website: some("https://www.themusicalhop.com"),
            genres: strings(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]),
            seeking_talent: true,
            seeking_description: some(
                "We are on the lookout for a local artist to play every two weeks. Please call us.",
            ),
        },
    )
    .await?;

    venues::create(
        session,
        CreateVenue {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            phone: some("914-003-1132"),
            image_link: some("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=750"),
            facebook_link: some("https://www.facebook.com/theduelingpianos"),
            website: some("https://www.theduelingpianos.com"),
            genres: strings(&["Classical", "R&B", "Hip-Hop"]),
            seeking_talent: false,
            seeking_description: None,
        },
    )
    .await?;

    let park_square = venues::create(
        session,
        CreateVenue {
            name: "Park Square Live Music & Coffee".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: some("415-000-1234"),
            image_link: some("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=747"),
            facebook_link: some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee"),
            website: some("https://www.parksquarelivemusicandcoffee.com"),
            genres: strings(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            seeking_talent: false,
            seeking_description: None,
        },
    )
    .await?;

    let guns_n_petals = artists::create(
        session,
        CreateArtist {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: some("326-123-5000"),
            image_link: some("https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300"),
            facebook_link: some("https://www.facebook.com/GunsNPetals"),
            website: some("https://www.gunsnpetalsband.com"),
            genres: strings(&["Rock n Roll"]),
            seeking_venue: true,
            seeking_description: some(
                "Looking for shows to perform at in the San Francisco Bay Area!",
            ),
        },
    )
    .await?;

    let matt_quevedo = artists::create(
        session,
        CreateArtist {
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: some("300-400-5000"),
            image_link: some("https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334"),
            facebook_link: some("https://www.facebook.com/mattquevedo923251523"),
            website: None,
            genres: strings(&["Jazz"]),
            seeking_venue: false,
            seeking_description: None,
        },
    )
    .await?;

    let wild_sax = artists::create(
        session,
        CreateArtist {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: some("432-325-5432"),
            image_link: some("https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794"),
            facebook_link: None,
            website: None,
            genres: strings(&["Jazz", "Classical"]),
            seeking_venue: false,
            seeking_description: None,
        },
    )
    .await?;

    let schedule = [
        (guns_n_petals.id, musical_hop.id, (2019, 5, 21, 21, 30)),
        (matt_quevedo.id, park_square.id, (2019, 6, 15, 23, 0)),
        (wild_sax.id, park_square.id, (2035, 4, 1, 20, 0)),
        (wild_sax.id, park_square.id, (2035, 4, 8, 20, 0)),
        (wild_sax.id, park_square.id, (2035, 4, 15, 20, 0)),
    ];

    for (artist_id, venue_id, (year, month, day, hour, minute)) in schedule {
        let start_time = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .ok_or_else(|| gigbook_core::GigError::storage("Invalid sample show time"))?;

        shows::create(
            session,
            CreateShow {
                artist_id,
                venue_id,
                start_time,
            },
        )
        .await?;
    }

    Ok(SeedReport {
        venues: 3,
        artists: 3,
        shows: schedule.len(),
    })
}
