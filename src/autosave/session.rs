use super::dirty::{is_dirty, DocumentFields};
use super::event_loop::EventLoop;
use crate::api::{BlogBackend, EnvConfig, SaveBlogRequest};
use crate::models::Blog;
use crate::toast::ToastKind;
use leptos::logging::{log, warn};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum SaveStatus {
    /// Nothing saved yet in this session, or the last attempt failed.
    #[default]
    Idle,
    Saving,
    Saved,
}

/// Outputs of an editor session towards the page hosting it.
pub(crate) trait SessionEvents {
    fn status_changed(&self, status: SaveStatus);

    fn notify(&self, kind: ToastKind, message: &str);

    /// An existing post was fetched; inputs and the rich-text surface should
    /// show these fields.
    fn loaded(&self, fields: &DocumentFields);

    /// A publish started (possibly queued behind a save) or failed.
    fn publishing_changed(&self, publishing: bool);

    /// Publish succeeded and the session is closed; leave the editor.
    fn published(&self, blog: &Blog);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EditorConfig {
    pub autosave_delay: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_delay: Duration::from_millis(5000),
        }
    }
}

impl From<&EnvConfig> for EditorConfig {
    fn from(env: &EnvConfig) -> Self {
        Self {
            autosave_delay: env.autosave_delay(),
        }
    }
}

struct SessionState<H> {
    snapshot: DocumentFields,
    live: DocumentFields,
    status: SaveStatus,
    timer: Option<H>,
    /// Set once the snapshot is initialized; no saves before that.
    ready: bool,
    closed: bool,
    /// A publish is in flight, or queued behind the save in flight.
    publishing: bool,
    /// Publish requested while saving; sent once that save completes.
    publish_queued: bool,
}

struct Inner<B, L: EventLoop, E> {
    backend: B,
    event_loop: L,
    events: E,
    config: EditorConfig,
    state: RefCell<SessionState<L::TimerHandle>>,
}

/// One editing session of a single post: dirty tracking plus debounced
/// autosave.
///
/// The session owns a single one-shot timer. Every tracked edit cancels it and
/// arms a fresh one, so an autosave happens only after `autosave_delay` of
/// inactivity. A tick re-arms the timer once its evaluation (and the save it
/// started, if any) is done, which keeps at most one save in flight.
pub(crate) struct EditorSession<B, L: EventLoop, E> {
    inner: Rc<Inner<B, L, E>>,
}

impl<B, L: EventLoop, E> Clone for EditorSession<B, L, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

// Inspection; the page follows the session through `SessionEvents` instead.
#[cfg_attr(not(test), allow(dead_code))]
impl<B, L: EventLoop, E> EditorSession<B, L, E> {
    pub fn status(&self) -> SaveStatus {
        self.inner.state.borrow().status
    }

    pub fn snapshot(&self) -> DocumentFields {
        self.inner.state.borrow().snapshot.clone()
    }

    pub fn live(&self) -> DocumentFields {
        self.inner.state.borrow().live.clone()
    }

    pub fn is_dirty(&self) -> bool {
        let st = self.inner.state.borrow();
        is_dirty(&st.live, &st.snapshot)
    }
}

impl<B, L, E> EditorSession<B, L, E>
where
    B: BlogBackend + 'static,
    L: EventLoop + 'static,
    E: SessionEvents + 'static,
{
    pub fn new(backend: B, event_loop: L, events: E, config: EditorConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                backend,
                event_loop,
                events,
                config,
                state: RefCell::new(SessionState {
                    snapshot: DocumentFields::default(),
                    live: DocumentFields::default(),
                    status: SaveStatus::Idle,
                    timer: None,
                    ready: false,
                    closed: false,
                    publishing: false,
                    publish_queued: false,
                }),
            }),
        }
    }

    /// Start editing a post that doesn't exist yet.
    pub fn open_new(&self) {
        {
            let mut st = self.inner.state.borrow_mut();
            st.snapshot = DocumentFields::default();
            st.live = DocumentFields::default();
            st.ready = true;
        }
        log!("editor session opened for a new post");
        self.arm_timer();
    }

    /// Fetch an existing post and start editing it once it has arrived.
    pub fn open_existing(&self, id: String) {
        let session = self.clone();
        self.spawn(async move { session.load_existing(&id).await });
    }

    async fn load_existing(&self, id: &str) {
        let result = self.inner.backend.fetch_blog(id).await;

        if self.inner.state.borrow().closed {
            return;
        }

        match result {
            Ok(blog) => {
                let fields = DocumentFields::from_blog(&blog);
                {
                    let mut st = self.inner.state.borrow_mut();
                    st.snapshot = fields.clone();
                    st.live = fields.clone();
                    st.ready = true;
                }
                log!("editor session opened for post {id}");
                self.inner.events.loaded(&fields);
            }
            Err(e) => {
                warn!("failed to fetch post {id} ({:?}): {e}", e.kind);
                {
                    let mut st = self.inner.state.borrow_mut();
                    st.snapshot = DocumentFields::default();
                    st.live = DocumentFields::default();
                    st.ready = true;
                }
                self.inner
                    .events
                    .notify(ToastKind::Error, "Failed to fetch blog");
                // Clear whatever was typed while loading; the session starts empty.
                self.inner.events.loaded(&DocumentFields::default());
            }
        }

        self.arm_timer();
    }

    pub fn set_title(&self, title: String) {
        self.edit(|live| replace_if_changed(&mut live.title, title));
    }

    pub fn set_tags(&self, tags_raw: String) {
        self.edit(|live| replace_if_changed(&mut live.tags_raw, tags_raw));
    }

    /// Change notification from the rich-text surface.
    pub fn set_content(&self, content: String) {
        self.edit(|live| replace_if_changed(&mut live.content, content));
    }

    fn edit(&self, apply: impl FnOnce(&mut DocumentFields) -> bool) {
        let rearm = {
            let mut st = self.inner.state.borrow_mut();
            if st.closed {
                return;
            }
            apply(&mut st.live) && st.ready
        };
        if rearm {
            self.arm_timer();
        }
    }

    /// Manual "Save Draft": save now if there is anything to save.
    pub fn trigger_save(&self) {
        if let Some(sent) = self.begin_save() {
            let session = self.clone();
            self.spawn(async move { session.save(sent).await });
        }
    }

    /// Manual "Publish": always sends the current fields, dirty or not.
    ///
    /// Only one publish runs at a time. While a save is in flight the publish
    /// waits for it, so a first save's id is reused instead of creating a
    /// second post.
    pub fn trigger_publish(&self) {
        let queued = {
            let mut st = self.inner.state.borrow_mut();
            if st.closed || !st.ready || st.publishing {
                return;
            }
            st.publishing = true;
            st.publish_queued = st.status == SaveStatus::Saving;
            st.publish_queued
        };
        self.inner.events.publishing_changed(true);
        if !queued {
            self.start_publish();
        }
    }

    fn start_publish(&self) {
        let req = self.inner.state.borrow().live.to_request();
        let session = self.clone();
        self.spawn(async move { session.publish(req).await });
    }

    /// End the session. Pending autosave timers are cancelled; saves already in
    /// flight complete without touching the page.
    pub fn close(&self) {
        let timer = {
            let mut st = self.inner.state.borrow_mut();
            if st.closed {
                return;
            }
            st.closed = true;
            st.timer.take()
        };
        if let Some(handle) = timer {
            self.inner.event_loop.clear_timeout(handle);
        }
        log!("editor session closed");
    }

    fn arm_timer(&self) {
        let previous = self.inner.state.borrow_mut().timer.take();
        if let Some(handle) = previous {
            self.inner.event_loop.clear_timeout(handle);
        }

        if self.inner.state.borrow().closed {
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let handle = self.inner.event_loop.set_timeout(
            self.inner.config.autosave_delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    EditorSession { inner }.on_tick();
                }
            }),
        );
        self.inner.state.borrow_mut().timer = handle;
    }

    fn on_tick(&self) {
        {
            let mut st = self.inner.state.borrow_mut();
            st.timer = None;
            if st.closed || !st.ready {
                return;
            }
        }

        match self.begin_save() {
            Some(sent) => {
                let session = self.clone();
                self.spawn(async move {
                    session.save(sent).await;
                    session.arm_timer();
                });
            }
            None => self.arm_timer(),
        }
    }

    /// Guarded transition into `Saving`. Returns the fields to send.
    fn begin_save(&self) -> Option<DocumentFields> {
        let sent = {
            let mut st = self.inner.state.borrow_mut();
            if st.closed || !st.ready || st.publishing || st.status == SaveStatus::Saving {
                return None;
            }
            if st.live.is_vacuous() || !is_dirty(&st.live, &st.snapshot) {
                return None;
            }
            st.status = SaveStatus::Saving;
            st.live.clone()
        };
        self.inner.events.status_changed(SaveStatus::Saving);
        Some(sent)
    }

    async fn save(&self, sent: DocumentFields) {
        let req = sent.to_request();
        let result = self.inner.backend.save_draft(&req).await;

        let (status, closed, publish_now) = {
            let mut st = self.inner.state.borrow_mut();
            let status = match &result {
                Ok(blog) => {
                    let mut acked = sent;
                    if acked.id.is_none() && !blog.id.is_empty() {
                        acked.id = Some(blog.id.clone());
                    }
                    if st.live.id.is_none() {
                        st.live.id = acked.id.clone();
                    }
                    st.snapshot = acked;
                    SaveStatus::Saved
                }
                Err(_) => SaveStatus::Idle,
            };
            st.status = status;
            let publish_now = st.publish_queued && !st.closed;
            st.publish_queued = false;
            (status, st.closed, publish_now)
        };

        if !closed {
            self.inner.events.status_changed(status);
        }

        match result {
            Ok(_) => self
                .inner
                .events
                .notify(ToastKind::Success, "Draft saved successfully"),
            Err(e) => {
                warn!("autosave failed ({:?}): {e}", e.kind);
                self.inner
                    .events
                    .notify(ToastKind::Error, "Failed to save draft");
            }
        }

        if publish_now {
            self.start_publish();
        }
    }

    async fn publish(&self, req: SaveBlogRequest) {
        let result = self.inner.backend.publish(&req).await;
        self.inner.state.borrow_mut().publishing = false;

        match result {
            Ok(blog) => {
                self.inner
                    .events
                    .notify(ToastKind::Success, "Blog published successfully");
                if self.inner.state.borrow().closed {
                    return;
                }
                self.close();
                self.inner.events.published(&blog);
            }
            Err(e) => {
                warn!("publish failed ({:?}): {e}", e.kind);
                self.inner
                    .events
                    .notify(ToastKind::Error, "Failed to publish blog");
                if !self.inner.state.borrow().closed {
                    self.inner.events.publishing_changed(false);
                }
            }
        }
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        self.inner.event_loop.spawn_local(Box::pin(task));
    }
}

fn replace_if_changed(slot: &mut String, value: String) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
