//! Listing helpers: area grouping and name search.

use crate::types::{VenueArea, VenueSummary};

/// Case-insensitive substring match on a record name.
///
/// An empty term matches every name.
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Group venues by exact (city, state) pair.
///
/// Areas appear in the order their first venue appears in the input, and
/// venues keep their input order inside each area.
pub fn group_by_area<I>(venues: I) -> Vec<VenueArea>
where
    I: IntoIterator<Item = (String, String, VenueSummary)>,
{
    let mut areas: Vec<VenueArea> = Vec::new();
    for (city, state, venue) in venues {
        match areas
            .iter_mut()
            .find(|area| area.city == city && area.state == state)
        {
            Some(area) => area.venues.push(venue),
            None => areas.push(VenueArea {
                city,
                state,
                venues: vec![venue],
            }),
        }
    }
    areas
}
