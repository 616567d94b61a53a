mod artist;
mod search;
mod show;
mod venue;

pub use artist::{Artist, ArtistDetail, ArtistId, ArtistSummary, CreateArtist, UpdateArtist};
pub use search::SearchResults;
pub use show::{CreateShow, Show, ShowId, ShowListing, ShowWithArtist, ShowWithVenue};
pub use venue::{CreateVenue, UpdateVenue, Venue, VenueArea, VenueDetail, VenueId, VenueSummary};
