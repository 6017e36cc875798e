use super::*;
use async_trait::async_trait;
use chrono::Utc;
use jockey_core::message::{ChatBatch, ChatMessage, Track};
use jockey_queue::Status;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

fn msg(text: &str) -> ChatMessage {
    ChatMessage {
        id: "m".into(),
        author_id: "viewer".into(),
        author_name: Some("Viewer".into()),
        text: text.into(),
        published_at: Utc::now(),
    }
}

fn batch(texts: &[&str], next_cursor: Option<&str>) -> ChatBatch {
    ChatBatch {
        messages: texts.iter().map(|t| msg(t)).collect(),
        next_cursor: next_cursor.map(String::from),
    }
}

/// Chat feed replaying a fixed sequence of batches, then empty ones.
struct ScriptedChat {
    batches: Mutex<VecDeque<ChatBatch>>,
    cursors_seen: Mutex<Vec<Option<String>>>,
}

impl ScriptedChat {
    fn new(batches: Vec<ChatBatch>) -> Self {
        Self {
            batches: Mutex::new(batches.into()),
            cursors_seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatFeed for ScriptedChat {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn resolve_live_chat(&self, _: &str) -> Result<Option<String>, JockeyError> {
        Ok(Some("live".into()))
    }

    async fn fetch(
        &self,
        _: &str,
        cursor: Option<&str>,
    ) -> Result<ChatBatch, JockeyError> {
        self.cursors_seen
            .lock()
            .unwrap()
            .push(cursor.map(String::from));
        Ok(self.batches.lock().unwrap().pop_front().unwrap_or_default())
    }
}

/// Provider returning a canned reply, counting calls.
struct CannedProvider {
    reply: String,
    calls: Mutex<u32>,
}

impl CannedProvider {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(0),
        }
    }
}

#[async_trait]
impl Provider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    fn requires_api_key(&self) -> bool {
        false
    }

    async fn complete(&self, _prompt: &str) -> Result<String, JockeyError> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.reply.clone())
    }

    async fn is_available(&self) -> bool {
        true
    }
}

/// Player recording queries; finds a track or misses, per `found`.
struct FakePlayer {
    found: bool,
    queries: Mutex<Vec<String>>,
}

impl FakePlayer {
    fn new(found: bool) -> Self {
        Self {
            found,
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Player for FakePlayer {
    fn name(&self) -> &str {
        "fake"
    }

    async fn search_and_play(&self, query: &str) -> Result<Option<Track>, JockeyError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.found.then(|| Track {
            title: "Found".into(),
            artist: "Artist".into(),
            url: "https://example.invalid/track".into(),
        }))
    }
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("__jockey_test_{name}__"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir.join("requests.txt")
}

fn cleanup(path: &Path) {
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

fn dj_with(
    chat: Arc<ScriptedChat>,
    provider: Arc<CannedProvider>,
    player: Arc<FakePlayer>,
    store: RequestStore,
) -> Dj {
    Dj::new(
        chat,
        provider,
        player,
        store,
        "live".into(),
        "/dj".into(),
        Duration::from_secs(10),
    )
}

#[tokio::test]
async fn test_idle_cycle_skips_resolution_and_leaves_store_untouched() {
    // Empty store, poll yields no candidates: the loop idles cleanly.
    let path = scratch("dj_idle");
    let chat = Arc::new(ScriptedChat::new(vec![ChatBatch::default()]));
    let provider = Arc::new(CannedProvider::new("unused"));
    let player = Arc::new(FakePlayer::new(true));
    let store = RequestStore::open(&path).unwrap();

    let mut dj = dj_with(chat, provider.clone(), player.clone(), store);
    dj.tick().await.unwrap();

    assert!(dj.store.records().is_empty());
    assert_eq!(*provider.calls.lock().unwrap(), 0);
    assert!(player.queries.lock().unwrap().is_empty());
    cleanup(&path);
}

#[tokio::test]
async fn test_duplicate_requests_in_one_poll_merge_to_one_record() {
    // Two viewers request the same song within a single poll batch.
    let path = scratch("dj_dup_batch");
    let chat = Arc::new(ScriptedChat::new(vec![batch(
        &["/dj Bohemian Rhapsody", "/dj Bohemian Rhapsody"],
        None,
    )]));
    let provider = Arc::new(CannedProvider::new("Bohemian Rhapsody - Queen"));
    let player = Arc::new(FakePlayer::new(true));
    let store = RequestStore::open(&path).unwrap();

    let mut dj = dj_with(chat, provider.clone(), player, store);
    dj.tick().await.unwrap();

    assert_eq!(dj.store.records().len(), 1);
    assert_eq!(dj.store.records()[0].text, "Bohemian Rhapsody");
    assert_eq!(*provider.calls.lock().unwrap(), 1);
    cleanup(&path);
}

#[tokio::test]
async fn test_not_found_query_is_still_marked_played() {
    // The search misses, yet the request permanently leaves the pool.
    let path = scratch("dj_not_found");
    let chat = Arc::new(ScriptedChat::new(vec![batch(&["/dj asdkfjh"], None)]));
    let provider = Arc::new(CannedProvider::new("gibberish reply"));
    let player = Arc::new(FakePlayer::new(false));
    let store = RequestStore::open(&path).unwrap();

    let mut dj = dj_with(chat, provider, player, store);
    dj.tick().await.unwrap();

    assert_eq!(dj.store.records().len(), 1);
    assert_eq!(dj.store.records()[0].status, Status::Played);
    cleanup(&path);
}

#[tokio::test]
async fn test_played_request_excluded_from_later_cycles() {
    let path = scratch("dj_exclusion");
    let chat = Arc::new(ScriptedChat::new(vec![
        batch(&["/dj song A"], None),
        // The same request arrives again after it was serviced.
        batch(&["/dj song A"], None),
    ]));
    let provider = Arc::new(CannedProvider::new("song A - somebody"));
    let player = Arc::new(FakePlayer::new(true));
    let store = RequestStore::open(&path).unwrap();

    let mut dj = dj_with(chat, provider.clone(), player, store);
    dj.tick().await.unwrap();
    dj.tick().await.unwrap();

    // One record, played once; second cycle idled.
    assert_eq!(dj.store.records().len(), 1);
    assert_eq!(dj.store.records()[0].status, Status::Played);
    assert_eq!(*provider.calls.lock().unwrap(), 1);
    cleanup(&path);
}

#[tokio::test]
async fn test_cursor_threaded_between_iterations() {
    let path = scratch("dj_cursor");
    let chat = Arc::new(ScriptedChat::new(vec![
        batch(&[], Some("page2")),
        ChatBatch::default(),
    ]));
    let provider = Arc::new(CannedProvider::new("unused"));
    let player = Arc::new(FakePlayer::new(true));
    let store = RequestStore::open(&path).unwrap();

    let mut dj = dj_with(chat.clone(), provider, player, store);
    dj.tick().await.unwrap();
    assert_eq!(dj.cursor.as_deref(), Some("page2"));
    dj.tick().await.unwrap();
    // The feed returned no token this time; the cursor resets with it.
    assert!(dj.cursor.is_none());

    let seen = chat.cursors_seen.lock().unwrap();
    assert_eq!(*seen, vec![None, Some("page2".to_string())]);
    cleanup(&path);
}

#[tokio::test]
async fn test_reply_line_breaks_stripped_before_search() {
    let path = scratch("dj_newlines");
    let chat = Arc::new(ScriptedChat::new(vec![batch(&["/dj queen please"], None)]));
    let provider = Arc::new(CannedProvider::new("Bohemian Rhapsody\n- Queen\n"));
    let player = Arc::new(FakePlayer::new(true));
    let store = RequestStore::open(&path).unwrap();

    let mut dj = dj_with(chat, provider, player.clone(), store);
    dj.tick().await.unwrap();

    let queries = player.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0], "Bohemian Rhapsody- Queen");
    cleanup(&path);
}
