use crate::components::ui::{Button, ButtonSize, ButtonVariant, ItemCard};
use crate::models::{Blog, BlogStatus};
use crate::state::{AppContext, BlogList};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsValue;

fn status_badge_class(status: BlogStatus) -> &'static str {
    match status {
        BlogStatus::Published => "bg-green-100 text-green-800",
        BlogStatus::Draft => "bg-yellow-100 text-yellow-800",
    }
}

/// Localized calendar date for an ISO timestamp; empty when it doesn't parse.
fn format_date(iso: &str) -> String {
    if iso.trim().is_empty() {
        return String::new();
    }
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return String::new();
    }
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

/// One post on the dashboard. Clicking anywhere but Delete opens the editor.
#[component]
pub(crate) fn BlogItem(blog: Blog, list: BlogList) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let navigate = StoredValue::new(use_navigate());
    let is_deleting: RwSignal<bool> = RwSignal::new(false);

    let id = blog.id.clone();
    let edit_path = format!("/editor/{id}");
    let open = move || {
        let path = edit_path.clone();
        navigate.with_value(|nav| nav(&path, Default::default()));
    };
    let open_from_button = open.clone();

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if is_deleting.get_untracked() {
            return;
        }

        let confirmed = window()
            .confirm_with_message("Are you sure you want to delete this blog?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        is_deleting.set(true);
        let api_client = app_state.0.api_client.clone();
        let toasts = app_state.0.toasts;
        let id = id.clone();
        spawn_local(async move {
            if let Err(e) = list.delete(api_client, toasts, id).await {
                warn!("delete not applied: {e}");
            }
            // The item may already be unmounted on success.
            let _ = is_deleting.try_set(false);
        });
    };

    let blog_id = blog.id.clone();
    let title = blog.display_title().to_string();
    let date = format_date(&blog.updated_at);
    let tags = blog.tags.join(", ");
    let has_tags = !tags.is_empty();
    let status = blog.status;

    view! {
        <ItemCard attr:data-blog-id=blog_id on:click=move |_| open()>
            <div class="flex items-start justify-between gap-2">
                <h3 class="truncate text-lg font-semibold text-gray-900">
                    {title}
                </h3>
                <span class=format!(
                    "shrink-0 rounded px-2 py-1 text-xs font-medium {}",
                    status_badge_class(status),
                )>{status.to_string()}</span>
            </div>

            <p class="mt-2 text-sm text-gray-500">{date}</p>

            <Show when=move || has_tags>
                <p class="mt-1 truncate text-sm text-gray-600">{tags.clone()}</p>
            </Show>

            <div class="mt-4 flex items-center gap-2">
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        open_from_button();
                    }
                >
                    "Edit"
                </Button>
                <Button
                    variant=ButtonVariant::Destructive
                    size=ButtonSize::Sm
                    attr:disabled=move || is_deleting.get()
                    on:click=on_delete
                >
                    {move || if is_deleting.get() { "Deleting..." } else { "Delete" }}
                </Button>
            </div>
        </ItemCard>
    }
}
