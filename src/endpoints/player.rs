//! Playback control of the current user's Spotify Connect devices.
//!
//! Commands that change playback need a Premium account. `device_id` targets
//! a specific device; when `None`, the currently active device is used.
//! `additional_types` lists item types besides `track` the client supports
//! (`episode`).

use super::{Query, RepeatState};

/// `GET` the current playback state.
///
/// Scopes: `user-read-playback-state`.
pub fn get_playback_state(market: Option<&str>, additional_types: &[&str]) -> String {
    Query::new("/me/player")
        .opt("market", market)
        .opt_list("additional_types", additional_types)
        .build()
}

/// `PUT` to transfer playback to another device (device ids go in the body).
///
/// Scopes: `user-modify-playback-state`.
pub fn transfer_playback() -> String {
    Query::new("/me/player").build()
}

/// `GET` the devices available to the user.
///
/// Scopes: `user-read-playback-state`.
pub fn get_available_devices() -> String {
    Query::new("/me/player/devices").build()
}

/// `GET` the item currently playing.
///
/// Scopes: `user-read-currently-playing`.
pub fn get_currently_playing_track(market: Option<&str>, additional_types: &[&str]) -> String {
    Query::new("/me/player/currently-playing")
        .opt("market", market)
        .opt_list("additional_types", additional_types)
        .build()
}

/// `PUT` to start a new context or resume playback.
///
/// Scopes: `user-modify-playback-state`.
pub fn start_resume_playback(device_id: Option<&str>) -> String {
    Query::new("/me/player/play")
        .opt("device_id", device_id)
        .build()
}

/// `PUT` to pause playback.
///
/// Scopes: `user-modify-playback-state`.
pub fn pause_playback(device_id: Option<&str>) -> String {
    Query::new("/me/player/pause")
        .opt("device_id", device_id)
        .build()
}

/// `POST` to skip to the next item in the queue.
///
/// Scopes: `user-modify-playback-state`.
pub fn skip_to_next(device_id: Option<&str>) -> String {
    Query::new("/me/player/next")
        .opt("device_id", device_id)
        .build()
}

/// `POST` to skip to the previous item.
///
/// Scopes: `user-modify-playback-state`.
pub fn skip_to_previous(device_id: Option<&str>) -> String {
    Query::new("/me/player/previous")
        .opt("device_id", device_id)
        .build()
}

/// `PUT` to seek to a position (milliseconds) in the current item.
///
/// Scopes: `user-modify-playback-state`.
pub fn seek_to_position(position_ms: u64, device_id: Option<&str>) -> String {
    Query::new("/me/player/seek")
        .param("position_ms", position_ms)
        .opt("device_id", device_id)
        .build()
}

/// `PUT` to set the repeat mode.
///
/// Scopes: `user-modify-playback-state`.
pub fn set_repeat_mode(state: RepeatState, device_id: Option<&str>) -> String {
    Query::new("/me/player/repeat")
        .param("state", state)
        .opt("device_id", device_id)
        .build()
}

/// `PUT` to set the volume, clamped to 0-100 percent.
///
/// Scopes: `user-modify-playback-state`.
pub fn set_playback_volume(volume_percent: u8, device_id: Option<&str>) -> String {
    Query::new("/me/player/volume")
        .param("volume_percent", volume_percent.min(100))
        .opt("device_id", device_id)
        .build()
}

/// `PUT` to toggle shuffle.
///
/// Scopes: `user-modify-playback-state`.
pub fn toggle_playback_shuffle(state: bool, device_id: Option<&str>) -> String {
    Query::new("/me/player/shuffle")
        .param("state", state)
        .opt("device_id", device_id)
        .build()
}

/// `GET` recently played tracks.
///
/// `after` and `before` are Unix timestamps in milliseconds; Spotify accepts
/// only one of them per request.
///
/// Scopes: `user-read-recently-played`.
pub fn get_recently_played_tracks(
    limit: Option<u32>,
    after: Option<i64>,
    before: Option<i64>,
) -> String {
    Query::new("/me/player/recently-played")
        .opt("limit", limit)
        .opt("after", after)
        .opt("before", before)
        .build()
}

/// `GET` the user's queue.
///
/// Scopes: `user-read-currently-playing`, `user-read-playback-state`.
pub fn get_users_queue() -> String {
    Query::new("/me/player/queue").build()
}

/// `POST` a track or episode URI to the end of the queue.
///
/// Scopes: `user-modify-playback-state`.
pub fn add_item_to_queue(uri: &str, device_id: Option<&str>) -> String {
    Query::new("/me/player/queue")
        .param("uri", uri)
        .opt("device_id", device_id)
        .build()
}
