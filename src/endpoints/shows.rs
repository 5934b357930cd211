use super::{Query, segment};

/// `GET` a single show.
///
/// Scopes: `user-read-playback-position` to get episode resume points.
pub fn get_show(id: &str, market: Option<&str>) -> String {
    Query::new(format!("/shows/{}", segment(id)))
        .opt("market", market)
        .build()
}

/// `GET` several shows (maximum 50 ids).
pub fn get_several_shows(ids: &[&str], market: Option<&str>) -> String {
    Query::new("/shows")
        .list("ids", ids)
        .opt("market", market)
        .build()
}

/// `GET` the episodes of a show.
///
/// Scopes: `user-read-playback-position`.
pub fn get_show_episodes(
    id: &str,
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    Query::new(format!("/shows/{}/episodes", segment(id)))
        .opt("market", market)
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `GET` the shows saved in the current user's library.
///
/// Scopes: `user-library-read`.
pub fn get_users_saved_shows(limit: Option<u32>, offset: Option<u32>) -> String {
    Query::new("/me/shows")
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `PUT` shows into the current user's library.
///
/// Scopes: `user-library-modify`.
pub fn save_shows_for_current_user(ids: &[&str]) -> String {
    Query::new("/me/shows").list("ids", ids).build()
}

/// `DELETE` shows from the current user's library.
///
/// Scopes: `user-library-modify`.
pub fn remove_users_saved_shows(ids: &[&str], market: Option<&str>) -> String {
    Query::new("/me/shows")
        .list("ids", ids)
        .opt("market", market)
        .build()
}

/// `GET` whether shows are saved in the current user's library.
///
/// Scopes: `user-library-read`.
pub fn check_users_saved_shows(ids: &[&str]) -> String {
    Query::new("/me/shows/contains").list("ids", ids).build()
}
