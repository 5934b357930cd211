#![allow(deprecated)]

use spotlibfy::endpoints::{
    API_BASE_URL, AlbumGroup, FollowType, RepeatState, SearchType, TimeRange, TopItemType, albums,
    artists, audiobooks, categories, chapters, episodes, genres, markets, player, playlists,
    search, shows, tracks, users,
};

fn api(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

#[test]
fn test_optional_parameters_are_left_out() {
    assert_eq!(albums::get_album("id1", None), api("/albums/id1"));
    assert_eq!(
        albums::get_album_tracks("id1", None, None, None),
        api("/albums/id1/tracks")
    );
    assert_eq!(
        albums::get_album_tracks("id1", Some("ES"), Some(10), Some(5)),
        api("/albums/id1/tracks?market=ES&limit=10&offset=5")
    );
}

#[test]
fn test_list_parameters_are_comma_joined() {
    assert_eq!(
        albums::get_several_albums(&["a", "b", "c"], None),
        api("/albums?ids=a%2Cb%2Cc")
    );
    assert_eq!(
        tracks::check_users_saved_tracks(&["t1", "t2"]),
        api("/me/tracks/contains?ids=t1%2Ct2")
    );
}

#[test]
fn test_query_values_are_encoded() {
    assert_eq!(
        search::search_for_item("artist:Miles Davis", &[SearchType::Album, SearchType::Track], Some("US"), Some(5), None, None),
        api("/search?q=artist%3AMiles%20Davis&type=album%2Ctrack&market=US&limit=5")
    );
}

#[test]
fn test_path_segments_are_encoded() {
    assert_eq!(users::get_users_profile("john doe"), api("/users/john%20doe"));
}

#[test]
fn test_single_question_mark() {
    let urls = [
        chapters::get_chapter("c1", Some("ES")),
        shows::get_show_episodes("s1", Some("ES"), Some(1), Some(2)),
        playlists::get_playlist_items("p1", Some("ES"), Some("items(track(name))"), Some(1), Some(2), &["episode"]),
        player::get_recently_played_tracks(Some(10), Some(1_700_000_000_000), None),
        episodes::get_users_saved_episodes(Some("ES"), Some(1), Some(0)),
    ];

    for url in urls {
        assert_eq!(url.matches('?').count(), 1, "{}", url);
    }
}

#[test]
fn test_resource_paths() {
    assert_eq!(audiobooks::get_several_audiobooks(&["a1"], None), api("/audiobooks?ids=a1"));
    assert_eq!(chapters::get_several_chapters(&["c1"], None), api("/chapters?ids=c1"));
    assert_eq!(
        playlists::get_users_playlists("u1", None, None),
        api("/users/u1/playlists")
    );
    assert_eq!(playlists::create_playlist("u1"), api("/users/u1/playlists"));
    assert_eq!(
        users::get_users_top_items(TopItemType::Artists, Some(TimeRange::ShortTerm), None, None),
        api("/me/top/artists?time_range=short_term")
    );
    assert_eq!(
        tracks::get_several_tracks_audio_features(&["t1"]),
        api("/audio-features?ids=t1")
    );
    assert_eq!(tracks::get_track_audio_analysis("t1"), api("/audio-analysis/t1"));
    assert_eq!(player::get_users_queue(), api("/me/player/queue"));
    assert_eq!(markets::get_available_markets(), api("/markets"));
    assert_eq!(
        genres::get_available_genre_seeds(),
        api("/recommendations/available-genre-seeds")
    );
    assert_eq!(
        categories::get_single_browse_category("dinner", None),
        api("/browse/categories/dinner")
    );
}

#[test]
fn test_artist_albums_groups() {
    assert_eq!(
        artists::get_artist_albums("a1", &[AlbumGroup::Single, AlbumGroup::AppearsOn], None, Some(50), None),
        api("/artists/a1/albums?include_groups=single%2Cappears_on&limit=50")
    );
    assert_eq!(
        artists::get_artist_albums("a1", &[], None, None, None),
        api("/artists/a1/albums")
    );
}

#[test]
fn test_player_controls() {
    assert_eq!(
        player::set_repeat_mode(RepeatState::Context, None),
        api("/me/player/repeat?state=context")
    );
    assert_eq!(
        player::set_playback_volume(150, Some("dev1")),
        api("/me/player/volume?volume_percent=100&device_id=dev1")
    );
    assert_eq!(
        player::toggle_playback_shuffle(true, None),
        api("/me/player/shuffle?state=true")
    );
    assert_eq!(
        player::add_item_to_queue("spotify:track:t1", None),
        api("/me/player/queue?uri=spotify%3Atrack%3At1")
    );
}

#[test]
fn test_follow_endpoints() {
    assert_eq!(
        users::follow_artists_or_users(FollowType::User, &["u1", "u2"]),
        api("/me/following?type=user&ids=u1%2Cu2")
    );
    assert_eq!(
        users::get_followed_artists(Some("last"), Some(50)),
        api("/me/following?type=artist&after=last&limit=50")
    );
    assert_eq!(
        users::check_if_current_user_follows_playlist("p1"),
        api("/playlists/p1/followers/contains")
    );
}

#[test]
fn test_recommendations() {
    let params = tracks::Recommendations {
        seed_genres: vec!["jazz", "soul"],
        limit: Some(10),
        tunables: vec![
            tracks::Tunable::new(tracks::Bound::Target, tracks::Attribute::Energy, 0.8),
            tracks::Tunable::new(tracks::Bound::Min, tracks::Attribute::Tempo, 90.0),
        ],
        ..Default::default()
    };

    assert_eq!(
        tracks::get_recommendations(&params),
        api("/recommendations?seed_genres=jazz%2Csoul&limit=10&target_energy=0.8&min_tempo=90")
    );
}

#[test]
fn test_saved_items_library() {
    assert_eq!(
        shows::remove_users_saved_shows(&["s1"], Some("ES")),
        api("/me/shows?ids=s1&market=ES")
    );
    assert_eq!(
        audiobooks::check_users_saved_audiobooks(&["a1"]),
        api("/me/audiobooks/contains?ids=a1")
    );
}
