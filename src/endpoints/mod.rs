//! # Web API endpoint URL builders
//!
//! One module per resource family. Every function is a pure formatter that
//! returns the full URL of one Web API operation, ready to be handed to an
//! HTTP client (see [`crate::spotify::request::get`]). The HTTP method and the
//! scopes each operation needs are listed in its documentation.
//!
//! ## Conventions
//!
//! - Query values and path segments are percent-encoded.
//! - Optional parameters are `Option`s and are left out of the URL when `None`,
//!   so Spotify applies its own defaults (`limit=20`, `offset=0`, ...).
//! - List parameters (`ids`, `uris`, ...) take slices and are sent comma-joined.
//! - Endpoints Spotify has deprecated are kept and marked `#[deprecated]`.
//!
//! ```
//! use spotlibfy::endpoints::albums;
//!
//! let url = albums::get_album_tracks("4aawyAB9vmqN3uQ7FjRGTy", Some("ES"), Some(10), None);
//! assert_eq!(
//!     url,
//!     "https://api.spotify.com/v1/albums/4aawyAB9vmqN3uQ7FjRGTy/tracks?market=ES&limit=10"
//! );
//! ```

use std::fmt;

use crate::utils;

pub mod albums;
pub mod artists;
pub mod audiobooks;
pub mod categories;
pub mod chapters;
pub mod episodes;
pub mod genres;
pub mod markets;
pub mod player;
pub mod playlists;
pub mod search;
pub mod shows;
pub mod tracks;
pub mod users;

pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Incremental URL builder shared by the endpoint modules.
///
/// Inserts `?` before the first parameter and `&` before every other one, so
/// a URL never carries two `?`.
#[derive(Debug, Clone)]
pub(crate) struct Query {
    url: String,
    has_params: bool,
}

impl Query {
    /// Starts from `API_BASE_URL` followed by `path` (which begins with `/`).
    pub(crate) fn new(path: impl AsRef<str>) -> Self {
        Self {
            url: format!("{}{}", API_BASE_URL, path.as_ref()),
            has_params: false,
        }
    }

    pub(crate) fn param(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.url.push(if self.has_params { '&' } else { '?' });
        self.url.push_str(key);
        self.url.push('=');
        self.url.push_str(&utils::percent_encode(&value.to_string()));
        self.has_params = true;
        self
    }

    pub(crate) fn opt<V: fmt::Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    pub(crate) fn list<V: fmt::Display>(self, key: &str, values: &[V]) -> Self {
        self.param(key, join(values))
    }

    pub(crate) fn opt_list<V: fmt::Display>(self, key: &str, values: &[V]) -> Self {
        if values.is_empty() {
            return self;
        }
        self.list(key, values)
    }

    pub(crate) fn build(self) -> String {
        self.url
    }
}

/// Percent-encodes one path segment such as an id.
pub(crate) fn segment(value: &str) -> String {
    utils::percent_encode(value)
}

fn join<V: fmt::Display>(values: &[V]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Item types accepted by search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
    Show,
    Episode,
    Audiobook,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
            SearchType::Show => "show",
            SearchType::Episode => "episode",
            SearchType::Audiobook => "audiobook",
        }
    }
}

/// Release groups used to filter an artist's albums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumGroup {
    Album,
    Single,
    AppearsOn,
    Compilation,
}

impl AlbumGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumGroup::Album => "album",
            AlbumGroup::Single => "single",
            AlbumGroup::AppearsOn => "appears_on",
            AlbumGroup::Compilation => "compilation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatState {
    /// Repeat the current track.
    Track,
    /// Repeat the current context (album, playlist, ...).
    Context,
    Off,
}

impl RepeatState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatState::Track => "track",
            RepeatState::Context => "context",
            RepeatState::Off => "off",
        }
    }
}

/// Time frame over which top items are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    /// Roughly one year of data.
    LongTerm,
    /// Roughly the last six months.
    #[default]
    MediumTerm,
    /// Roughly the last four weeks.
    ShortTerm,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::LongTerm => "long_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::ShortTerm => "short_term",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopItemType {
    Artists,
    Tracks,
}

impl TopItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopItemType::Artists => "artists",
            TopItemType::Tracks => "tracks",
        }
    }
}

/// What the current user follows: artists or other users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowType {
    Artist,
    User,
}

impl FollowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowType::Artist => "artist",
            FollowType::User => "user",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AlbumGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RepeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TopItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FollowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
