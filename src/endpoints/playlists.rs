//! Playlists, their items and cover images.
//!
//! `fields` is Spotify's field filter, e.g. `items(added_by.id,track(name))`.

use super::{Query, segment};

/// `GET` a playlist owned by any user.
pub fn get_playlist(
    playlist_id: &str,
    market: Option<&str>,
    fields: Option<&str>,
    additional_types: &[&str],
) -> String {
    Query::new(format!("/playlists/{}", segment(playlist_id)))
        .opt("market", market)
        .opt("fields", fields)
        .opt_list("additional_types", additional_types)
        .build()
}

/// `PUT` new name, description or visibility (sent in the body).
///
/// Scopes: `playlist-modify-public`, `playlist-modify-private`.
pub fn change_playlist_details(playlist_id: &str) -> String {
    Query::new(format!("/playlists/{}", segment(playlist_id))).build()
}

/// `GET` the items of a playlist.
///
/// Scopes: `playlist-read-private`.
pub fn get_playlist_items(
    playlist_id: &str,
    market: Option<&str>,
    fields: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
    additional_types: &[&str],
) -> String {
    Query::new(format!("/playlists/{}/tracks", segment(playlist_id)))
        .opt("market", market)
        .opt("fields", fields)
        .opt("limit", limit)
        .opt("offset", offset)
        .opt_list("additional_types", additional_types)
        .build()
}

/// `PUT` to replace or reorder the items of a playlist (maximum 100 URIs).
///
/// Scopes: `playlist-modify-public`, `playlist-modify-private`.
pub fn update_playlist_items(playlist_id: &str, uris: &[&str]) -> String {
    Query::new(format!("/playlists/{}/tracks", segment(playlist_id)))
        .opt_list("uris", uris)
        .build()
}

/// `POST` items to a playlist, at `position` or appended when `None`.
///
/// Scopes: `playlist-modify-public`, `playlist-modify-private`.
pub fn add_items_to_playlist(playlist_id: &str, position: Option<u32>, uris: &[&str]) -> String {
    Query::new(format!("/playlists/{}/tracks", segment(playlist_id)))
        .opt_list("uris", uris)
        .opt("position", position)
        .build()
}

/// `DELETE` items from a playlist (URIs go in the body).
///
/// Scopes: `playlist-modify-public`, `playlist-modify-private`.
pub fn remove_playlist_items(playlist_id: &str) -> String {
    Query::new(format!("/playlists/{}/tracks", segment(playlist_id))).build()
}

/// `GET` the playlists owned or followed by the current user.
///
/// Scopes: `playlist-read-private`.
pub fn get_current_users_playlists(limit: Option<u32>, offset: Option<u32>) -> String {
    Query::new("/me/playlists")
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `GET` the playlists owned or followed by a user.
///
/// Scopes: `playlist-read-private`, `playlist-read-collaborative`.
pub fn get_users_playlists(user_id: &str, limit: Option<u32>, offset: Option<u32>) -> String {
    Query::new(format!("/users/{}/playlists", segment(user_id)))
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `POST` a new, empty playlist for a user (details go in the body).
///
/// Scopes: `playlist-modify-public`, `playlist-modify-private`.
pub fn create_playlist(user_id: &str) -> String {
    Query::new(format!("/users/{}/playlists", segment(user_id))).build()
}

/// `GET` Spotify's featured playlists.
#[deprecated(note = "Spotify deprecated this endpoint")]
pub fn get_featured_playlists(
    locale: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    Query::new("/browse/featured-playlists")
        .opt("locale", locale)
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `GET` the playlists tagged with a browse category.
#[deprecated(note = "Spotify deprecated this endpoint")]
pub fn get_category_playlists(
    category_id: &str,
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    Query::new(format!("/browse/categories/{}/playlists", segment(category_id)))
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `GET` the cover image of a playlist.
pub fn get_playlist_cover_image(playlist_id: &str) -> String {
    Query::new(format!("/playlists/{}/images", segment(playlist_id))).build()
}

/// `PUT` a base64 JPEG as custom cover image.
///
/// Scopes: `ugc-image-upload`, `playlist-modify-public`, `playlist-modify-private`.
pub fn add_custom_playlist_cover_image(playlist_id: &str) -> String {
    get_playlist_cover_image(playlist_id)
}
