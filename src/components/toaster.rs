use crate::state::AppContext;
use crate::toast::ToastKind;
use icons::X;
use leptos::prelude::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "border-green-200 bg-green-50 text-green-800",
        ToastKind::Error => "border-red-200 bg-red-50 text-red-800",
    }
}

/// Bottom-right stack of the app's transient notifications.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<AppContext>().0.toasts;

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-2">
            <For each=move || toasts.items() key=|t| t.id let:toast>
                <div
                    class=format!(
                        "flex items-start justify-between gap-3 rounded-md border px-4 py-3 text-sm shadow-md {}",
                        toast_class(toast.kind),
                    )
                    role="status"
                    data-kind=toast.kind.as_ref().to_string()
                >
                    <span>{toast.message.clone()}</span>
                    <button
                        class="opacity-60 hover:opacity-100"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.dismiss(toast.id)
                    >
                        <X class="size-4" />
                    </button>
                </div>
            </For>
        </div>
    }
}
