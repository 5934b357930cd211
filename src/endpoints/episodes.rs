//! Podcast episodes. The saved-episodes endpoints are in beta on Spotify's side.

use super::{Query, segment};

/// `GET` a single episode.
///
/// Scopes: `user-read-playback-position` to get the resume point.
pub fn get_episode(id: &str, market: Option<&str>) -> String {
    Query::new(format!("/episodes/{}", segment(id)))
        .opt("market", market)
        .build()
}

/// `GET` several episodes (maximum 50 ids).
pub fn get_several_episodes(ids: &[&str], market: Option<&str>) -> String {
    Query::new("/episodes")
        .list("ids", ids)
        .opt("market", market)
        .build()
}

/// `GET` the episodes saved in the current user's library.
///
/// Scopes: `user-library-read`, `user-read-playback-position`.
pub fn get_users_saved_episodes(
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    Query::new("/me/episodes")
        .opt("market", market)
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `PUT` episodes into the current user's library.
///
/// Scopes: `user-library-modify`.
pub fn save_episodes_for_current_user(ids: &[&str]) -> String {
    Query::new("/me/episodes").list("ids", ids).build()
}

/// `DELETE` episodes from the current user's library.
///
/// Scopes: `user-library-modify`.
pub fn remove_users_saved_episodes(ids: &[&str]) -> String {
    save_episodes_for_current_user(ids)
}

/// `GET` whether episodes are saved in the current user's library.
///
/// Scopes: `user-library-read`.
pub fn check_users_saved_episodes(ids: &[&str]) -> String {
    Query::new("/me/episodes/contains").list("ids", ids).build()
}
