// tests/support/mocks.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use weebapi::application::ports::{sentiment::SentimentScorer, time::Clock};
use weebapi::domain::cursor::ListCursor;
use weebapi::domain::errors::{DomainError, DomainResult};
use weebapi::domain::message::{
    Message, MessageId, MessageRepository, MessageUpdate, NewMessage,
};
use weebapi::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostSlug, PostTitle, PostUpdate,
    PostWriteRepository,
};
use weebapi::domain::sentiment::SentimentLabel;

static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Clock that moves forward one second per call so records get distinct,
/// ordered timestamps.
pub struct TickingClock {
    ticks: AtomicU32,
}

impl TickingClock {
    pub fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + chrono::Duration::seconds(i64::from(tick))
    }
}

/// Positive when the text mentions a known positive word, negative otherwise.
/// Counts calls so tests can tell whether scoring happened at all.
pub struct KeywordScorer {
    calls: AtomicUsize,
}

impl KeywordScorer {
    const POSITIVE: [&'static str; 4] = ["love", "great", "good", "merci"];

    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SentimentScorer for KeywordScorer {
    fn score(&self, text: &str) -> SentimentLabel {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let lowered = text.to_lowercase();
        if Self::POSITIVE.iter().any(|word| lowered.contains(word)) {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        }
    }
}

fn page<T, F>(
    mut records: Vec<T>,
    limit: u32,
    cursor: Option<ListCursor>,
    key: F,
) -> (Vec<T>, Option<ListCursor>)
where
    F: Fn(&T) -> (DateTime<Utc>, i64),
{
    records.sort_by(|a, b| key(b).cmp(&key(a)));
    let mut records: Vec<T> = records
        .into_iter()
        .filter(|record| match &cursor {
            Some(cursor) => key(record) < (cursor.created_at, cursor.id),
            None => true,
        })
        .collect();

    let limit = limit.clamp(1, 100) as usize;
    let mut next = None;
    if records.len() > limit {
        records.truncate(limit);
        next = records.last().map(|last| {
            let (created_at, id) = key(last);
            ListCursor::new(created_at, id)
        });
    }
    (records, next)
}

/// Post storage backing both repository ports, enforcing the same unique
/// constraints as the database.
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicU32,
    races: AtomicU32,
    inserts: AtomicU32,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(1),
            races: AtomicU32::new(0),
            inserts: AtomicU32::new(0),
        }
    }

    /// The next `count` inserts lose a race: a rival post takes the slug
    /// first and the insert fails with `SlugConflict`.
    pub fn with_races(self, count: u32) -> Self {
        self.races.store(count, Ordering::SeqCst);
        self
    }

    pub fn seed(&self, post: Post) {
        self.posts.lock().unwrap().push(post);
    }

    pub fn insert_attempts(&self) -> u32 {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn slugs(&self) -> Vec<String> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .map(|post| post.slug.as_str().to_string())
            .collect()
    }

    fn allocate_id(&self) -> PostId {
        PostId::new(i64::from(self.next_id.fetch_add(1, Ordering::SeqCst))).unwrap()
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.inserts.fetch_add(1, Ordering::SeqCst);

        let raced = self
            .races
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if raced {
            let id = self.allocate_id();
            let rival = Post {
                id,
                title: PostTitle::new(format!("rival {}", i64::from(id))).unwrap(),
                slug: post.slug.clone(),
                excerpt: post.excerpt.clone(),
                content: post.content.clone(),
                author: post.author.clone(),
                category: post.category,
                date: None,
                read_time: 0,
                is_published: true,
                created_at: post.created_at,
                updated_at: post.updated_at,
            };
            self.posts.lock().unwrap().push(rival);
            return Err(DomainError::SlugConflict(format!(
                "slug `{}` already exists",
                post.slug
            )));
        }

        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|existing| existing.slug == post.slug) {
            return Err(DomainError::SlugConflict(format!(
                "slug `{}` already exists",
                post.slug
            )));
        }
        if posts.iter().any(|existing| existing.title == post.title) {
            return Err(DomainError::Conflict("title already exists".into()));
        }

        let stored = Post {
            id: self.allocate_id(),
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            author: post.author,
            category: post.category,
            date: post.date,
            read_time: post.read_time,
            is_published: post.is_published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        posts.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(title) = &update.title {
            if posts
                .iter()
                .any(|other| other.id != update.id && &other.title == title)
            {
                return Err(DomainError::Conflict("title already exists".into()));
            }
        }
        let post = posts
            .iter_mut()
            .find(|post| post.id == update.id && post.updated_at == update.original_updated_at)
            .ok_or_else(|| DomainError::Conflict("post update conflict, please retry".into()))?;
        post.apply(&update);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|post| &post.slug == slug)
            .cloned())
    }

    async fn slugs_with_prefix(&self, base: &str) -> DomainResult<Vec<String>> {
        let prefix = format!("{base}-");
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .map(|post| post.slug.as_str())
            .filter(|slug| *slug == base || slug.starts_with(&prefix))
            .map(str::to_string)
            .collect())
    }

    async fn list_page(
        &self,
        published_only: Option<bool>,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Post>, Option<ListCursor>)> {
        let posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|post| published_only.is_none_or(|flag| post.is_published == flag))
            .cloned()
            .collect();
        Ok(page(posts, limit, cursor, |post| {
            (post.created_at, i64::from(post.id))
        }))
    }
}

pub struct InMemoryMessageRepo {
    messages: Mutex<Vec<Message>>,
    next_id: AtomicU32,
    broken: AtomicBool,
}

impl InMemoryMessageRepo {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(1),
            broken: AtomicBool::new(false),
        }
    }

    /// Every later write fails the way a lost database connection would.
    pub fn break_writes(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> DomainResult<()> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        Ok(())
    }

    pub fn stored(&self, id: i64) -> Option<Message> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .find(|message| i64::from(message.id) == id)
            .cloned()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepo {
    async fn insert(&self, message: NewMessage) -> DomainResult<Message> {
        self.check_writable()?;
        let id = MessageId::new(i64::from(self.next_id.fetch_add(1, Ordering::SeqCst)))?;
        let stored = Message {
            id,
            first_name: message.first_name,
            last_name: message.last_name,
            phone_number: message.phone_number,
            email_address: message.email_address,
            text: message.text,
            sentiment: message.sentiment,
            created_at: message.created_at,
            updated_at: message.updated_at,
        };
        self.messages.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: MessageUpdate) -> DomainResult<Message> {
        self.check_writable()?;
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|message| message.id == update.id)
            .ok_or_else(|| DomainError::NotFound("message not found".into()))?;
        message.first_name = update.first_name;
        message.last_name = update.last_name;
        message.phone_number = update.phone_number;
        message.email_address = update.email_address;
        message.text = update.text;
        message.sentiment = update.sentiment;
        message.updated_at = update.updated_at;
        Ok(message.clone())
    }

    async fn find_by_id(&self, id: MessageId) -> DomainResult<Option<Message>> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .find(|message| message.id == id)
            .cloned())
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Message>, Option<ListCursor>)> {
        let messages = self.messages.lock().unwrap().clone();
        Ok(page(messages, limit, cursor, |message| {
            (message.created_at, i64::from(message.id))
        }))
    }
}
