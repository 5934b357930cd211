use super::Query;

/// `GET` the markets where Spotify is available.
pub fn get_available_markets() -> String {
    Query::new("/markets").build()
}
