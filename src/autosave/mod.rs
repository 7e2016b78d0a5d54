//! Dirty tracking and debounced autosave for the post editor.

mod dirty;
mod event_loop;
mod session;

#[cfg(test)]
pub(crate) mod testing;

pub(crate) use dirty::DocumentFields;
pub(crate) use event_loop::BrowserLoop;
pub(crate) use session::{EditorConfig, EditorSession, SaveStatus, SessionEvents};
