//! Deterministic stand-ins for the browser and the backend, used by the
//! session tests.

use super::dirty::DocumentFields;
use super::event_loop::{EventLoop, LocalTask};
use super::session::{SaveStatus, SessionEvents};
use crate::api::{ApiError, ApiResult, BlogBackend, SaveBlogRequest};
use crate::models::{Blog, BlogStatus};
use crate::toast::ToastKind;
use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::task::LocalSpawnExt;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

pub(crate) fn blog(id: &str, title: &str, content: &str, tags: &[&str]) -> Blog {
    Blog {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        status: BlogStatus::Draft,
        created_at: "2024-03-01T10:00:00.000Z".to_string(),
        updated_at: "2024-03-01T10:00:00.000Z".to_string(),
    }
}

type TimerKey = (Duration, u64);

struct ManualLoopInner {
    now: Cell<Duration>,
    next_timer: Cell<u64>,
    timers: RefCell<BTreeMap<TimerKey, Box<dyn FnOnce()>>>,
    pool: RefCell<LocalPool>,
    spawner: LocalSpawner,
}

/// Virtual-clock event loop. Time only moves in [`ManualLoop::advance`].
#[derive(Clone)]
pub(crate) struct ManualLoop {
    inner: Rc<ManualLoopInner>,
}

impl ManualLoop {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            inner: Rc::new(ManualLoopInner {
                now: Cell::new(Duration::ZERO),
                next_timer: Cell::new(0),
                timers: RefCell::new(BTreeMap::new()),
                pool: RefCell::new(pool),
                spawner,
            }),
        }
    }

    pub fn now(&self) -> Duration {
        self.inner.now.get()
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.timers.borrow().len()
    }

    /// Poll spawned tasks until none can make progress.
    pub fn run_until_stalled(&self) {
        self.inner.pool.borrow_mut().run_until_stalled();
    }

    /// Move the clock forward, firing due timers in order and draining tasks
    /// after each one.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.run_until_stalled();

        loop {
            let next = self.inner.timers.borrow().keys().next().copied();
            let Some(key) = next.filter(|(due, _)| *due <= target) else {
                break;
            };
            let callback = self.inner.timers.borrow_mut().remove(&key);
            self.inner.now.set(key.0);
            if let Some(callback) = callback {
                callback();
            }
            self.run_until_stalled();
        }

        self.inner.now.set(target);
    }
}

impl EventLoop for ManualLoop {
    type TimerHandle = TimerKey;

    fn set_timeout(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Option<Self::TimerHandle> {
        let id = self.inner.next_timer.get();
        self.inner.next_timer.set(id + 1);
        let key = (self.now() + delay, id);
        self.inner.timers.borrow_mut().insert(key, callback);
        Some(key)
    }

    fn clear_timeout(&self, handle: Self::TimerHandle) {
        self.inner.timers.borrow_mut().remove(&handle);
    }

    fn spawn_local(&self, task: LocalTask) {
        self.inner
            .spawner
            .spawn_local(task)
            .expect("local pool accepts tasks");
    }
}

/// In-memory backend that records every request.
///
/// With `hold_saves` (or `hold_publish`) set, `save_draft` (or `publish`)
/// stays pending until [`FakeBackend::release_held`].
#[derive(Default)]
pub(crate) struct FakeBackend {
    blogs: RefCell<HashMap<String, Blog>>,
    save_calls: RefCell<Vec<SaveBlogRequest>>,
    publish_calls: RefCell<Vec<SaveBlogRequest>>,
    pub fail_saves: Cell<bool>,
    pub fail_publish: Cell<bool>,
    pub hold_saves: Cell<bool>,
    pub hold_publish: Cell<bool>,
    held: RefCell<Vec<oneshot::Sender<()>>>,
    in_flight: Cell<usize>,
    max_in_flight: Cell<usize>,
    next_id: Cell<u32>,
}

impl FakeBackend {
    pub fn insert(&self, blog: Blog) {
        self.blogs.borrow_mut().insert(blog.id.clone(), blog);
    }

    pub fn get(&self, id: &str) -> Option<Blog> {
        self.blogs.borrow().get(id).cloned()
    }

    pub fn post_count(&self) -> usize {
        self.blogs.borrow().len()
    }

    pub fn save_calls(&self) -> Vec<SaveBlogRequest> {
        self.save_calls.borrow().clone()
    }

    pub fn publish_calls(&self) -> Vec<SaveBlogRequest> {
        self.publish_calls.borrow().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.get()
    }

    pub fn release_held(&self) {
        for tx in self.held.borrow_mut().drain(..) {
            let _ = tx.send(());
        }
    }

    fn persist(&self, req: &SaveBlogRequest, publish: bool) -> ApiResult<Blog> {
        let mut blogs = self.blogs.borrow_mut();

        let existing = match &req.id {
            Some(id) => Some(
                blogs
                    .get(id)
                    .cloned()
                    .ok_or_else(|| ApiError::not_found("Blog not found"))?,
            ),
            None => None,
        };

        let (id, status, created_at) = match existing {
            Some(b) => (b.id, b.status, b.created_at),
            None => {
                let n = self.next_id.get() + 1;
                self.next_id.set(n);
                (
                    format!("blog-{n}"),
                    BlogStatus::Draft,
                    "2024-03-01T10:00:00.000Z".to_string(),
                )
            }
        };

        let blog = Blog {
            id: id.clone(),
            title: req.title.clone(),
            content: req.content.clone(),
            tags: req.tags.clone(),
            status: if publish { BlogStatus::Published } else { status },
            created_at,
            updated_at: "2024-03-02T10:00:00.000Z".to_string(),
        };
        blogs.insert(id, blog.clone());
        Ok(blog)
    }
}

impl BlogBackend for Rc<FakeBackend> {
    async fn list_blogs(&self) -> ApiResult<Vec<Blog>> {
        let mut list: Vec<Blog> = self.blogs.borrow().values().cloned().collect();
        list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    async fn fetch_blog(&self, id: &str) -> ApiResult<Blog> {
        self.get(id).ok_or_else(|| ApiError::not_found("Blog not found"))
    }

    async fn save_draft(&self, req: &SaveBlogRequest) -> ApiResult<Blog> {
        self.save_calls.borrow_mut().push(req.clone());

        let in_flight = self.in_flight.get() + 1;
        self.in_flight.set(in_flight);
        self.max_in_flight.set(self.max_in_flight.get().max(in_flight));

        if self.hold_saves.get() {
            let (tx, rx) = oneshot::channel();
            self.held.borrow_mut().push(tx);
            let _ = rx.await;
        }

        self.in_flight.set(self.in_flight.get() - 1);

        if self.fail_saves.get() {
            return Err(ApiError::http(500, "boom", "Request failed"));
        }
        self.persist(req, false)
    }

    async fn publish(&self, req: &SaveBlogRequest) -> ApiResult<Blog> {
        self.publish_calls.borrow_mut().push(req.clone());
        if self.hold_publish.get() {
            let (tx, rx) = oneshot::channel();
            self.held.borrow_mut().push(tx);
            let _ = rx.await;
        }
        if self.fail_publish.get() {
            return Err(ApiError::http(500, "boom", "Request failed"));
        }
        self.persist(req, true)
    }

    async fn delete_blog(&self, id: &str) -> ApiResult<()> {
        self.blogs
            .borrow_mut()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found("Blog not found"))
    }
}

#[derive(Default)]
pub(crate) struct RecordingEvents {
    statuses: RefCell<Vec<SaveStatus>>,
    toasts: RefCell<Vec<(ToastKind, String)>>,
    loaded: RefCell<Vec<DocumentFields>>,
    published: RefCell<Vec<Blog>>,
    publishing: RefCell<Vec<bool>>,
}

impl RecordingEvents {
    pub fn statuses(&self) -> Vec<SaveStatus> {
        self.statuses.borrow().clone()
    }

    pub fn toasts(&self) -> Vec<(ToastKind, String)> {
        self.toasts.borrow().clone()
    }

    pub fn loaded_fields(&self) -> Vec<DocumentFields> {
        self.loaded.borrow().clone()
    }

    pub fn publishing_flags(&self) -> Vec<bool> {
        self.publishing.borrow().clone()
    }

    pub fn published_blogs(&self) -> Vec<Blog> {
        self.published.borrow().clone()
    }
}

impl SessionEvents for Rc<RecordingEvents> {
    fn status_changed(&self, status: SaveStatus) {
        self.statuses.borrow_mut().push(status);
    }

    fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.borrow_mut().push((kind, message.to_string()));
    }

    fn loaded(&self, fields: &DocumentFields) {
        self.loaded.borrow_mut().push(fields.clone());
    }

    fn publishing_changed(&self, publishing: bool) {
        self.publishing.borrow_mut().push(publishing);
    }

    fn published(&self, blog: &Blog) {
        self.published.borrow_mut().push(blog.clone());
    }
}
