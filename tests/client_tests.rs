//! End-to-end tests against a mock API server
//!
//! Exercise the full flow: client → resource → pagination → HTTP →
//! model decoding, for both the async and the blocking client.

use clash_royale::{blocking, ClanSearchParams, Client, Error, ListOptions};
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn clan(tag: &str, name: &str, members: u32) -> serde_json::Value {
    json!({ "tag": tag, "name": name, "members": members, "clanScore": 50000 })
}

fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .no_rate_limit()
        .build()
        .unwrap()
}

// ============================================================================
// Async client
// ============================================================================

#[tokio::test]
async fn test_player_get_encodes_tag_and_sends_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/%239G9JL8QU"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag": "#9G9JL8QU",
            "name": "Ruben",
            "expLevel": 14,
            "trophies": 6543
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    // Lowercase tag without '#': normalized and percent-encoded.
    let player = client.players().get("9g9jl8qu").await.unwrap();

    assert_eq!(player.tag, "#9G9JL8QU");
    assert_eq!(player.trophies, 6543);
}

#[tokio::test]
async fn test_player_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/%23MISSING"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"reason":"notFound"}"#))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.players().get("#missing").await.unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_clan_search_paginates_with_cursors() {
    let server = MockServer::start().await;

    // First page: no cursor, camelCase filter params, page size as limit.
    Mock::given(method("GET"))
        .and(path("/clans"))
        .and(query_param("name", "Reddit"))
        .and(query_param("minMembers", "40"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [clan("#A", "Reddit Alpha", 50), clan("#B", "Reddit Bravo", 47)],
            "paging": { "cursors": { "after": "c1" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Second page: cursor from the first response, final page.
    Mock::given(method("GET"))
        .and(path("/clans"))
        .and(query_param("name", "Reddit"))
        .and(query_param("after", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [clan("#C", "Reddit Charlie", 44)],
            "paging": { "cursors": {} }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut clans = client
        .clans()
        .search(
            ClanSearchParams::name("Reddit").min_members(40),
            ListOptions::new().page_size(2),
        )
        .unwrap();

    let names: Vec<String> = clans
        .stream()
        .map_ok(|c| c.name)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(names, vec!["Reddit Alpha", "Reddit Bravo", "Reddit Charlie"]);
    assert!(clans.is_exhausted());

    // A second full pass replays the buffer; the mocks' expect(1) would
    // fail on any extra request.
    let replay: Vec<String> = clans
        .stream()
        .map_ok(|c| c.name)
        .try_collect()
        .await
        .unwrap();
    assert_eq!(replay.len(), 3);
}

#[tokio::test]
async fn test_clan_search_limit_caps_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clans"))
        .and(query_param("limit", "3"))
        .and(query_param_is_missing("after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [clan("#A", "a", 1), clan("#B", "b", 2), clan("#C", "c", 3)],
            "paging": { "cursors": { "after": "c1" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The remaining room is 1, so the follow-up request asks for 1.
    Mock::given(method("GET"))
        .and(path("/clans"))
        .and(query_param("limit", "1"))
        .and(query_param("after", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [clan("#D", "d", 4)],
            "paging": { "cursors": { "after": "c2" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut clans = client
        .clans()
        .search(
            ClanSearchParams::name("x"),
            ListOptions::new().limit(4).page_size(3),
        )
        .unwrap();

    let all = clans.all().await.unwrap();

    assert_eq!(all.len(), 4);
    assert!(clans.is_exhausted());
}

#[tokio::test]
async fn test_clan_members_get_by_index() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clans/%232Q8CCP0/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "tag": "#AAA", "name": "one", "role": "leader", "trophies": 6200, "clanRank": 1 },
                { "tag": "#BBB", "name": "two", "role": "member", "trophies": 6100, "clanRank": 2 }
            ],
            "paging": { "cursors": {} }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut members = client
        .clans()
        .members("#2q8ccp0", ListOptions::new())
        .unwrap();

    let leader = members.get(0).await.unwrap();
    assert_eq!(leader.role, "leader");

    let err = members.get(5).await.unwrap_err();
    assert!(matches!(err, Error::OutOfRange { index: 5, len: 2 }));
}

#[tokio::test]
async fn test_upcoming_chests_unwraps_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/%23AAA/upcomingchests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "index": 0, "name": "Golden Chest" },
                { "index": 1, "name": "Silver Chest" }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let chests = client.players().upcoming_chests("#AAA").await.unwrap();

    assert_eq!(chests.len(), 2);
    assert_eq!(chests[0].name, "Golden Chest");
}

#[tokio::test]
async fn test_leaderboard_players_slice() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/leaderboard/170000008"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": (1..=10).map(|rank| json!({
                "tag": format!("#P{rank}"),
                "name": format!("player{rank}"),
                "rank": rank,
                "score": 5000 - rank
            })).collect::<Vec<_>>(),
            "paging": { "cursors": {} }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut players = client
        .leaderboards()
        .get(170000008, ListOptions::new())
        .unwrap();

    let top_three = players.slice(..3).await.unwrap();

    assert_eq!(top_three.len(), 3);
    assert_eq!(top_three[0].rank, 1);
    assert!(top_three.windows(2).all(|w| w[0].rank <= w[1].rank));
}

// ============================================================================
// Blocking client
// ============================================================================

#[test]
fn test_blocking_cards_list_paginates() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cards"))
            .and(query_param_is_missing("after"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "id": 26000000, "name": "Knight" },
                    { "id": 26000001, "name": "Archers" }
                ],
                "paging": { "cursors": { "after": "c1" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/cards"))
            .and(query_param("after", "c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{ "id": 26000002, "name": "Goblins" }],
                "paging": { "cursors": {} }
            })))
            .expect(1)
            .mount(&server)
            .await;

        server
    });

    let client = blocking::Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .no_rate_limit()
        .build()
        .unwrap();

    let mut cards = client
        .cards()
        .list(ListOptions::new().page_size(2))
        .unwrap();

    let names: Vec<String> = cards
        .iter()
        .map(|card| card.map(|c| c.name))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(names, vec!["Knight", "Archers", "Goblins"]);
    assert!(cards.is_exhausted());

    // fetch() after exhaustion replays the buffer without new requests.
    assert_eq!(cards.fetch(2).unwrap().len(), 2);
}

#[test]
fn test_blocking_clan_get() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/clans/%232Q8CCP0"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tag": "#2Q8CCP0",
                "name": "Reddit Alpha",
                "members": 50
            })))
            .mount(&server)
            .await;

        server
    });

    let client = blocking::Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .no_rate_limit()
        .build()
        .unwrap();

    let clan = client.clans().get("2q8ccp0").unwrap();
    assert_eq!(clan.name, "Reddit Alpha");
    assert_eq!(clan.members, 50);
}

#[test]
fn test_blocking_rejects_empty_api_key() {
    assert!(matches!(
        blocking::Client::new(""),
        Err(Error::InvalidApiKey)
    ));
}
