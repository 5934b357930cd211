//! User profiles, top items and follows.

use super::{FollowType, Query, TimeRange, TopItemType, segment};

/// `GET` the current user's profile.
///
/// Scopes: `user-read-private`, `user-read-email`.
pub fn get_current_users_profile() -> String {
    Query::new("/me").build()
}

/// `GET` the current user's top artists or tracks.
///
/// Scopes: `user-top-read`.
pub fn get_users_top_items(
    item_type: TopItemType,
    time_range: Option<TimeRange>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    Query::new(format!("/me/top/{}", item_type))
        .opt("time_range", time_range)
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `GET` the public profile of a user.
pub fn get_users_profile(user_id: &str) -> String {
    Query::new(format!("/users/{}", segment(user_id))).build()
}

/// `PUT` to follow a playlist as the current user.
///
/// Scopes: `playlist-modify-public`, `playlist-modify-private`.
pub fn follow_playlist(playlist_id: &str) -> String {
    Query::new(format!("/playlists/{}/followers", segment(playlist_id))).build()
}

/// `DELETE` to unfollow a playlist.
///
/// Scopes: `playlist-modify-public`, `playlist-modify-private`.
pub fn unfollow_playlist(playlist_id: &str) -> String {
    follow_playlist(playlist_id)
}

/// `GET` the artists followed by the current user.
///
/// Paginated with a cursor: `after` is the last artist id of the previous page.
///
/// Scopes: `user-follow-read`.
pub fn get_followed_artists(after: Option<&str>, limit: Option<u32>) -> String {
    Query::new("/me/following")
        .param("type", FollowType::Artist)
        .opt("after", after)
        .opt("limit", limit)
        .build()
}

/// `PUT` to follow artists or users (maximum 50 ids).
///
/// Scopes: `user-follow-modify`.
pub fn follow_artists_or_users(follow_type: FollowType, ids: &[&str]) -> String {
    Query::new("/me/following")
        .param("type", follow_type)
        .list("ids", ids)
        .build()
}

/// `DELETE` to unfollow artists or users.
///
/// Scopes: `user-follow-modify`.
pub fn unfollow_artists_or_users(follow_type: FollowType, ids: &[&str]) -> String {
    follow_artists_or_users(follow_type, ids)
}

/// `GET` whether the current user follows artists or users.
///
/// Scopes: `user-follow-read`.
pub fn check_if_user_follows_artists_or_users(follow_type: FollowType, ids: &[&str]) -> String {
    Query::new("/me/following/contains")
        .param("type", follow_type)
        .list("ids", ids)
        .build()
}

/// `GET` whether the current user follows a playlist.
pub fn check_if_current_user_follows_playlist(playlist_id: &str) -> String {
    Query::new(format!(
        "/playlists/{}/followers/contains",
        segment(playlist_id)
    ))
    .build()
}
