use crate::autosave::SaveStatus;
use crate::components::ui::Spinner;
use icons::Check;
use leptos::prelude::*;

/// Save-state readout next to the editor buttons. Renders nothing while idle.
#[component]
pub(crate) fn AutoSaveIndicator(#[prop(into)] status: Signal<SaveStatus>) -> impl IntoView {
    view! {
        <div
            class="flex items-center gap-2 text-sm text-gray-500"
            data-status=move || status.get().to_string()
        >
            {move || match status.get() {
                SaveStatus::Saving => view! {
                    <Spinner />
                    <span>"Saving..."</span>
                }
                .into_any(),
                SaveStatus::Saved => view! {
                    <Check class="size-4 text-green-500" />
                    <span>"Saved"</span>
                }
                .into_any(),
                SaveStatus::Idle => ().into_any(),
            }}
        </div>
    }
}
