use crate::api::ApiClient;
use crate::autosave::{
    BrowserLoop, DocumentFields, EditorConfig, EditorSession, SaveStatus, SessionEvents,
};
use crate::components::ui::{Button, ButtonVariant, Card, Input};
use crate::components::{AutoSaveIndicator, RichTextEditor, RichTextSurface, Toolbar};
use crate::models::Blog;
use crate::state::AppContext;
use crate::toast::{ToastKind, Toasts};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct EditorRouteParams {
    pub id: Option<String>,
}

/// Bridges session output onto the page's signals.
#[derive(Clone, Copy)]
struct PageEvents {
    status: RwSignal<SaveStatus>,
    publishing: RwSignal<bool>,
    title: RwSignal<String>,
    tags: RwSignal<String>,
    surface: RichTextSurface,
    toasts: Toasts,
    on_published: Callback<()>,
}

impl SessionEvents for PageEvents {
    fn status_changed(&self, status: SaveStatus) {
        self.status.set(status);
    }

    fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.push(kind, message);
    }

    fn loaded(&self, fields: &DocumentFields) {
        self.title.set(fields.title.clone());
        self.tags.set(fields.tags_raw.clone());
        self.surface.set_content(&fields.content);
    }

    fn publishing_changed(&self, publishing: bool) {
        self.publishing.set(publishing);
    }

    fn published(&self, _blog: &Blog) {
        self.on_published.run(());
    }
}

type PageSession = EditorSession<ApiClient, BrowserLoop, PageEvents>;

/// `/editor` and `/editor/:id`. A change of id starts a fresh session.
#[component]
pub fn EditorPage() -> impl IntoView {
    let params = use_params::<EditorRouteParams>();
    let post_id = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|p| p.id)
            .filter(|id| !id.trim().is_empty())
    });

    move || view! { <EditorView id=post_id.get() /> }
}

#[component]
fn EditorView(id: Option<String>) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let navigate = StoredValue::new(use_navigate());

    let status: RwSignal<SaveStatus> = RwSignal::new(SaveStatus::Idle);
    let publishing: RwSignal<bool> = RwSignal::new(false);
    let title: RwSignal<String> = RwSignal::new(String::new());
    let tags: RwSignal<String> = RwSignal::new(String::new());
    let surface = RichTextSurface::new();

    let events = PageEvents {
        status,
        publishing,
        title,
        tags,
        surface,
        toasts: app_state.0.toasts,
        on_published: Callback::new(move |_| {
            navigate.with_value(|nav| nav("/dashboard", Default::default()));
        }),
    };

    let session: PageSession = EditorSession::new(
        app_state.0.api_client.clone(),
        BrowserLoop,
        events,
        EditorConfig::from(&app_state.0.config),
    );
    match id {
        Some(id) => session.open_existing(id),
        None => session.open_new(),
    }

    let session = StoredValue::new_local(session);
    on_cleanup(move || {
        session.try_with_value(|s| s.close());
    });

    let on_title =
        Callback::new(move |value: String| session.with_value(|s| s.set_title(value)));
    let on_tags =
        Callback::new(move |value: String| session.with_value(|s| s.set_tags(value)));
    let on_content =
        Callback::new(move |value: String| session.with_value(|s| s.set_content(value)));

    let is_saving = Signal::derive(move || status.get() == SaveStatus::Saving);

    view! {
        <div class="mx-auto max-w-4xl px-4 py-8">
            <div class="mb-6 space-y-4">
                <Input
                    class="text-4xl font-bold text-gray-900"
                    placeholder="Enter title..."
                    bind_value=title
                    on_value=on_title
                />
                <Input
                    class="text-gray-600"
                    placeholder="Enter tags (comma-separated)..."
                    bind_value=tags
                    on_value=on_tags
                />
            </div>

            <Card class="overflow-hidden">
                <Toolbar surface=surface on_change=on_content />
                <div class="p-6">
                    <RichTextEditor
                        surface=surface
                        on_change=on_content
                        placeholder="Start writing your blog post..."
                    />
                </div>
            </Card>

            <div class="mt-6 flex items-center justify-between">
                <AutoSaveIndicator status=status />
                <div class="flex items-center gap-3">
                    <Button
                        variant=ButtonVariant::Outline
                        attr:disabled=move || is_saving.get()
                        on:click=move |_| session.with_value(|s| s.trigger_save())
                    >
                        "Save Draft"
                    </Button>
                    <Button
                        attr:disabled=move || publishing.get()
                        on:click=move |_| session.with_value(|s| s.trigger_publish())
                    >
                        {move || if publishing.get() { "Publishing..." } else { "Publish" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
