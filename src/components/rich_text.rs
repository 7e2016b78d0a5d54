use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Handle to the contenteditable element that stands in for a rich-text
/// engine. Content is exchanged as an opaque HTML string.
#[derive(Clone, Copy)]
pub(crate) struct RichTextSurface {
    node: NodeRef<html::Div>,
    /// Bumped on input and selection changes so toolbar state re-renders.
    revision: RwSignal<u64>,
}

impl RichTextSurface {
    pub fn new() -> Self {
        Self {
            node: NodeRef::new(),
            revision: RwSignal::new(0),
        }
    }

    pub fn get_content(&self) -> String {
        self.node
            .get_untracked()
            .map(|el| el.inner_html())
            .unwrap_or_default()
    }

    pub fn set_content(&self, content: &str) {
        if let Some(el) = self.node.get_untracked() {
            el.set_inner_html(content);
            self.touch();
        }
    }

    pub fn focus(&self) {
        if let Some(el) = self.node.get_untracked() {
            let _ = el.focus();
        }
    }

    fn touch(&self) {
        self.revision.update(|r| *r = r.wrapping_add(1));
    }

    /// Tracked: subscribe to content/selection changes.
    pub fn track(&self) {
        self.revision.track();
    }

    /// Run a formatting command on the current selection.
    pub fn exec(&self, command: &str, value: Option<&str>) -> bool {
        self.focus();
        let Some(doc) = html_document() else {
            return false;
        };
        match doc.exec_command_with_show_ui_and_value(command, false, value.unwrap_or("")) {
            Ok(applied) => {
                self.touch();
                applied
            }
            Err(e) => {
                warn!("execCommand({command}) failed: {e:?}");
                false
            }
        }
    }

    pub fn is_active(&self, command: &str, block: Option<&str>) -> bool {
        let Some(doc) = html_document() else {
            return false;
        };
        match block {
            Some(tag) => doc
                .query_command_value("formatBlock")
                .map(|v| v.trim_matches(|c| c == '<' || c == '>').eq_ignore_ascii_case(tag))
                .unwrap_or(false),
            None => doc.query_command_state(command).unwrap_or(false),
        }
    }

    pub fn can(&self, command: &str) -> bool {
        html_document()
            .and_then(|doc| doc.query_command_enabled(command).ok())
            .unwrap_or(false)
    }
}

impl Default for RichTextSurface {
    fn default() -> Self {
        Self::new()
    }
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    document().dyn_into::<web_sys::HtmlDocument>().ok()
}

#[component]
pub(crate) fn RichTextEditor(
    surface: RichTextSurface,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    Effect::new(move |_| {
        if surface.node.get().is_some() && !disabled.get() {
            surface.focus();
        }
    });

    view! {
        <div
            node_ref=surface.node
            contenteditable=move || if disabled.get() { "false" } else { "true" }
            class="prose prose-lg max-w-none min-h-[320px] focus:outline-none empty:before:text-gray-400 empty:before:content-[attr(data-placeholder)]"
            data-placeholder=placeholder
            on:input=move |_| {
                surface.touch();
                on_change.run(surface.get_content());
            }
            on:keyup=move |_| surface.touch()
            on:mouseup=move |_| surface.touch()
        />
    }
}
