use leptos::prelude::*;
use std::time::Duration;

const TOAST_TTL: Duration = Duration::from_millis(4000);
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Append a toast, dropping the oldest ones beyond `max`.
pub(crate) fn push_toast(list: &mut Vec<Toast>, toast: Toast, max: usize) {
    list.push(toast);
    if list.len() > max {
        let overflow = list.len() - max;
        list.drain(..overflow);
    }
}

pub(crate) fn dismiss_toast(list: &mut Vec<Toast>, id: u64) -> bool {
    let before = list.len();
    list.retain(|t| t.id != id);
    list.len() != before
}

/// App-wide transient notifications. Each toast dismisses itself after a few
/// seconds.
#[derive(Clone, Copy)]
pub(crate) struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(vec![]),
            next_id: StoredValue::new(0),
        }
    }

    /// Tracked read for rendering.
    pub fn items(&self) -> Vec<Toast> {
        self.items.get()
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_value().wrapping_add(1);
        self.next_id.set_value(id);

        let toast = Toast {
            id,
            kind,
            message: message.into(),
        };
        self.items.update(|list| push_toast(list, toast, MAX_VISIBLE));

        let toasts = *self;
        leptos_dom::helpers::set_timeout(move || toasts.dismiss(id), TOAST_TTL);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        // The root owner may already be gone when a late timer fires.
        let _ = self.items.try_update(|list| dismiss_toast(list, id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
