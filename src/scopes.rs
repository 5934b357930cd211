//! OAuth scope catalog.
//!
//! Scopes are the named permissions a client requests in the authorization
//! URL. They are sent verbatim, space-joined, in the `scope` query parameter.

use std::{fmt, str::FromStr};

use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    UgcImageUpload,
    UserReadPlaybackState,
    UserModifyPlaybackState,
    UserReadCurrentlyPlaying,
    AppRemoteControl,
    Streaming,
    PlaylistReadPrivate,
    PlaylistReadCollaborative,
    PlaylistModifyPublic,
    PlaylistModifyPrivate,
    UserFollowModify,
    UserFollowRead,
    UserReadPlaybackPosition,
    UserTopRead,
    UserReadRecentlyPlayed,
    UserLibraryModify,
    UserLibraryRead,
    UserReadEmail,
    UserReadPrivate,
    UserPersonalized,
    UserSoaLink,
    UserSoaUnlink,
    SoaManageEntitlements,
    SoaManagePartner,
    SoaCreatePartner,
}

impl Scope {
    pub const ALL: [Scope; 25] = [
        Scope::UgcImageUpload,
        Scope::UserReadPlaybackState,
        Scope::UserModifyPlaybackState,
        Scope::UserReadCurrentlyPlaying,
        Scope::AppRemoteControl,
        Scope::Streaming,
        Scope::PlaylistReadPrivate,
        Scope::PlaylistReadCollaborative,
        Scope::PlaylistModifyPublic,
        Scope::PlaylistModifyPrivate,
        Scope::UserFollowModify,
        Scope::UserFollowRead,
        Scope::UserReadPlaybackPosition,
        Scope::UserTopRead,
        Scope::UserReadRecentlyPlayed,
        Scope::UserLibraryModify,
        Scope::UserLibraryRead,
        Scope::UserReadEmail,
        Scope::UserReadPrivate,
        Scope::UserPersonalized,
        Scope::UserSoaLink,
        Scope::UserSoaUnlink,
        Scope::SoaManageEntitlements,
        Scope::SoaManagePartner,
        Scope::SoaCreatePartner,
    ];

    /// The identifier sent to the authorization server.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::UgcImageUpload => "ugc-image-upload",
            Scope::UserReadPlaybackState => "user-read-playback-state",
            Scope::UserModifyPlaybackState => "user-modify-playback-state",
            Scope::UserReadCurrentlyPlaying => "user-read-currently-playing",
            Scope::AppRemoteControl => "app-remote-control",
            Scope::Streaming => "streaming",
            Scope::PlaylistReadPrivate => "playlist-read-private",
            Scope::PlaylistReadCollaborative => "playlist-read-collaborative",
            Scope::PlaylistModifyPublic => "playlist-modify-public",
            Scope::PlaylistModifyPrivate => "playlist-modify-private",
            Scope::UserFollowModify => "user-follow-modify",
            Scope::UserFollowRead => "user-follow-read",
            Scope::UserReadPlaybackPosition => "user-read-playback-position",
            Scope::UserTopRead => "user-top-read",
            Scope::UserReadRecentlyPlayed => "user-read-recently-played",
            Scope::UserLibraryModify => "user-library-modify",
            Scope::UserLibraryRead => "user-library-read",
            Scope::UserReadEmail => "user-read-email",
            Scope::UserReadPrivate => "user-read-private",
            Scope::UserPersonalized => "user-personalized",
            Scope::UserSoaLink => "user-soa-link",
            Scope::UserSoaUnlink => "user-soa-unlink",
            Scope::SoaManageEntitlements => "soa-manage-entitlements",
            Scope::SoaManagePartner => "soa-manage-partner",
            Scope::SoaCreatePartner => "soa-create-partner",
        }
    }

    /// What the scope grants, as listed in the Web API documentation.
    pub fn description(&self) -> &'static str {
        match self {
            Scope::UgcImageUpload => "Write access to user-provided images.",
            Scope::UserReadPlaybackState => "Read access to a user's player state.",
            Scope::UserModifyPlaybackState => "Write access to a user's playback state.",
            Scope::UserReadCurrentlyPlaying => "Read access to a user's currently playing content.",
            Scope::AppRemoteControl => "Remote control playback of Spotify (iOS and Android SDKs).",
            Scope::Streaming => "Control playback of a Spotify track (Web Playback SDK, Premium only).",
            Scope::PlaylistReadPrivate => "Read access to user's private playlists.",
            Scope::PlaylistReadCollaborative => "Include collaborative playlists when requesting a user's playlists.",
            Scope::PlaylistModifyPublic => "Write access to a user's public playlists.",
            Scope::PlaylistModifyPrivate => "Write access to a user's private playlists.",
            Scope::UserFollowModify => "Write/delete access to the list of artists and other users that the user follows.",
            Scope::UserFollowRead => "Read access to the list of artists and other users that the user follows.",
            Scope::UserReadPlaybackPosition => "Read access to a user's playback position in a content.",
            Scope::UserTopRead => "Read access to a user's top artists and tracks.",
            Scope::UserReadRecentlyPlayed => "Read access to a user's recently played tracks.",
            Scope::UserLibraryModify => "Write/delete access to a user's \"Your Music\" library.",
            Scope::UserLibraryRead => "Read access to a user's library.",
            Scope::UserReadEmail => "Read access to user's email address.",
            Scope::UserReadPrivate => "Read access to user's subscription details.",
            Scope::UserPersonalized => "Get personalized content for the user.",
            Scope::UserSoaLink => "Link a partner user account to a Spotify user account.",
            Scope::UserSoaUnlink => "Unlink a partner user account from a Spotify account.",
            Scope::SoaManageEntitlements => "Modify entitlements for linked users.",
            Scope::SoaManagePartner => "Update partner information.",
            Scope::SoaCreatePartner => "Create new partners, platform partners only.",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Scope::ALL
            .iter()
            .copied()
            .find(|scope| scope.as_str() == wanted)
            .ok_or_else(|| AuthError::Config(format!("unknown scope '{}'", wanted)))
    }
}

/// Ordered set of scopes requested in one authorization.
///
/// Insertion order is kept because it decides the serialized `scope` value.
/// Adding a scope that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSet {
    scopes: Vec<Scope>,
}

impl ScopeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scope: Scope) -> bool {
        if self.scopes.contains(&scope) {
            return false;
        }
        self.scopes.push(scope);
        true
    }

    pub fn with(mut self, scope: Scope) -> Self {
        self.insert(scope);
        self
    }

    /// Parses scope identifiers separated by spaces and/or commas.
    ///
    /// ```
    /// let scopes = ScopeSet::parse("user-read-email,playlist-modify-public")?;
    /// ```
    pub fn parse(input: &str) -> Result<Self, AuthError> {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(Scope::from_str)
            .collect()
    }

    pub fn contains(&self, scope: Scope) -> bool {
        self.scopes.contains(&scope)
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Scope> + '_ {
        self.scopes.iter().copied()
    }

    /// Space-joined identifiers, not yet percent-encoded.
    pub fn to_query_value(&self) -> String {
        self.scopes
            .iter()
            .map(Scope::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<Scope> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = Scope>>(iter: I) -> Self {
        let mut set = ScopeSet::new();
        for scope in iter {
            set.insert(scope);
        }
        set
    }
}

impl<const N: usize> From<[Scope; N]> for ScopeSet {
    fn from(scopes: [Scope; N]) -> Self {
        scopes.into_iter().collect()
    }
}
