//! Albums: catalog lookups and the current user's saved albums.
//!
//! `market` is an ISO 3166-1 alpha-2 country code (e.g. `ES`); when a user
//! token is sent, the user's country takes priority over it.

use super::{Query, segment};

/// `GET` a single album.
pub fn get_album(id: &str, market: Option<&str>) -> String {
    Query::new(format!("/albums/{}", segment(id)))
        .opt("market", market)
        .build()
}

/// `GET` several albums (maximum 20 ids).
pub fn get_several_albums(ids: &[&str], market: Option<&str>) -> String {
    Query::new("/albums")
        .list("ids", ids)
        .opt("market", market)
        .build()
}

/// `GET` the tracks of an album. `limit` ranges 1-50.
pub fn get_album_tracks(
    id: &str,
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    Query::new(format!("/albums/{}/tracks", segment(id)))
        .opt("market", market)
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `GET` the albums saved in the current user's library.
///
/// Scopes: `user-library-read`.
pub fn get_users_saved_albums(
    limit: Option<u32>,
    offset: Option<u32>,
    market: Option<&str>,
) -> String {
    Query::new("/me/albums")
        .opt("limit", limit)
        .opt("offset", offset)
        .opt("market", market)
        .build()
}

/// `PUT` albums into the current user's library (maximum 20 ids).
///
/// Scopes: `user-library-modify`.
pub fn save_albums_for_current_user(ids: &[&str]) -> String {
    Query::new("/me/albums").list("ids", ids).build()
}

/// `DELETE` albums from the current user's library.
///
/// Scopes: `user-library-modify`.
pub fn remove_users_saved_albums(ids: &[&str]) -> String {
    save_albums_for_current_user(ids)
}

/// `GET` whether albums are saved in the current user's library.
///
/// Scopes: `user-library-read`.
pub fn check_users_saved_albums(ids: &[&str]) -> String {
    Query::new("/me/albums/contains").list("ids", ids).build()
}

/// `GET` new album releases featured in Spotify's Browse tab.
pub fn get_new_releases(limit: Option<u32>, offset: Option<u32>) -> String {
    Query::new("/browse/new-releases")
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}
