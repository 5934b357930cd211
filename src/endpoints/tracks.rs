use std::fmt;

use super::{Query, segment};

/// `GET` a single track.
pub fn get_track(id: &str, market: Option<&str>) -> String {
    Query::new(format!("/tracks/{}", segment(id)))
        .opt("market", market)
        .build()
}

/// `GET` several tracks (maximum 50 ids).
pub fn get_several_tracks(ids: &[&str], market: Option<&str>) -> String {
    Query::new("/tracks")
        .list("ids", ids)
        .opt("market", market)
        .build()
}

/// `GET` the tracks saved in the current user's library.
///
/// Scopes: `user-library-read`.
pub fn get_users_saved_tracks(
    market: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    Query::new("/me/tracks")
        .opt("market", market)
        .opt("limit", limit)
        .opt("offset", offset)
        .build()
}

/// `PUT` tracks into the current user's library (ids go in the body).
///
/// Scopes: `user-library-modify`.
pub fn save_tracks_for_current_user() -> String {
    Query::new("/me/tracks").build()
}

/// `DELETE` tracks from the current user's library.
///
/// Scopes: `user-library-modify`.
pub fn remove_users_saved_tracks(ids: &[&str]) -> String {
    Query::new("/me/tracks").list("ids", ids).build()
}

/// `GET` whether tracks are saved in the current user's library.
///
/// Scopes: `user-library-read`.
pub fn check_users_saved_tracks(ids: &[&str]) -> String {
    Query::new("/me/tracks/contains").list("ids", ids).build()
}

/// `GET` audio features of several tracks.
#[deprecated(note = "Spotify deprecated this endpoint")]
pub fn get_several_tracks_audio_features(ids: &[&str]) -> String {
    Query::new("/audio-features").list("ids", ids).build()
}

/// `GET` audio features of one track.
#[deprecated(note = "Spotify deprecated this endpoint")]
pub fn get_track_audio_features(id: &str) -> String {
    Query::new(format!("/audio-features/{}", segment(id))).build()
}

/// `GET` the low-level audio analysis of one track.
#[deprecated(note = "Spotify deprecated this endpoint")]
pub fn get_track_audio_analysis(id: &str) -> String {
    Query::new(format!("/audio-analysis/{}", segment(id))).build()
}

/// Tunable track attribute of the recommendations endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Acousticness,
    Danceability,
    DurationMs,
    Energy,
    Instrumentalness,
    Key,
    Liveness,
    Loudness,
    Mode,
    Popularity,
    Speechiness,
    Tempo,
    TimeSignature,
    Valence,
}

impl Attribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Acousticness => "acousticness",
            Attribute::Danceability => "danceability",
            Attribute::DurationMs => "duration_ms",
            Attribute::Energy => "energy",
            Attribute::Instrumentalness => "instrumentalness",
            Attribute::Key => "key",
            Attribute::Liveness => "liveness",
            Attribute::Loudness => "loudness",
            Attribute::Mode => "mode",
            Attribute::Popularity => "popularity",
            Attribute::Speechiness => "speechiness",
            Attribute::Tempo => "tempo",
            Attribute::TimeSignature => "time_signature",
            Attribute::Valence => "valence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
    Target,
}

impl Bound {
    pub fn prefix(&self) -> &'static str {
        match self {
            Bound::Min => "min",
            Bound::Max => "max",
            Bound::Target => "target",
        }
    }
}

/// One `min_*`, `max_*` or `target_*` parameter, e.g. `target_energy=0.8`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tunable {
    pub attribute: Attribute,
    pub bound: Bound,
    pub value: f64,
}

impl Tunable {
    pub fn new(bound: Bound, attribute: Attribute, value: f64) -> Self {
        Self {
            attribute,
            bound,
            value,
        }
    }

    fn key(&self) -> String {
        format!("{}_{}", self.bound.prefix(), self.attribute.as_str())
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of the recommendations endpoint.
///
/// Up to five seeds in any combination of artists, genres and tracks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations<'a> {
    pub seed_artists: Vec<&'a str>,
    pub seed_genres: Vec<&'a str>,
    pub seed_tracks: Vec<&'a str>,
    pub limit: Option<u32>,
    pub market: Option<&'a str>,
    pub tunables: Vec<Tunable>,
}

/// `GET` track recommendations for the given seeds.
#[deprecated(note = "Spotify deprecated this endpoint")]
pub fn get_recommendations(params: &Recommendations<'_>) -> String {
    let query = Query::new("/recommendations")
        .opt_list("seed_artists", &params.seed_artists)
        .opt_list("seed_genres", &params.seed_genres)
        .opt_list("seed_tracks", &params.seed_tracks)
        .opt("limit", params.limit)
        .opt("market", params.market);

    params
        .tunables
        .iter()
        .fold(query, |query, tunable| query.param(&tunable.key(), tunable.value))
        .build()
}
