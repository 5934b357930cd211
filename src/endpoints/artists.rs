use super::{AlbumGroup, Query, segment};

/// `GET` a single artist.
pub fn get_artist(id: &str) -> String {
    Query::new(format!("/artists/{}", segment(id))).build()
}

/// `GET` several artists (maximum 50 ids).
pub fn get_several_artists(ids: &[&str]) -> String {
    Query::new("/artists").list("ids", ids).build()
}

/// `GET` the albums of an artist, optionally filtered by release group.
///
/// An empty `include_groups` returns every group.
pub fn get_artist_albums(
    id: &str,
    include_groups: &[AlbumGroup],
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    Query::new(format!("/artists/{}/albums", segment(id)))
        .opt_list("include_groups", include_groups)
        .opt("market", market)
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `GET` an artist's top tracks in a market.
pub fn get_artist_top_tracks(id: &str, market: Option<&str>) -> String {
    Query::new(format!("/artists/{}/top-tracks", segment(id)))
        .opt("market", market)
        .build()
}

/// `GET` artists similar to the given one.
#[deprecated(note = "Spotify deprecated this endpoint")]
pub fn get_related_artists(id: &str) -> String {
    Query::new(format!("/artists/{}/related-artists", segment(id))).build()
}
