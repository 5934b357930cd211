use super::Query;

/// `GET` the genres usable as recommendation seeds.
#[deprecated(note = "Spotify deprecated this endpoint")]
pub fn get_available_genre_seeds() -> String {
    Query::new("/recommendations/available-genre-seeds").build()
}
