use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Borderless single-line input, as used for the post title and tags.
#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] disabled: Signal<bool>,

    // Manual wiring instead of `bind:value`; the page also needs every
    // keystroke to reach the editor session.
    #[prop(into)] bind_value: RwSignal<String>,
    #[prop(into, optional)] on_value: Option<Callback<String>>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "w-full border-none bg-transparent outline-none focus:outline-none focus:ring-0 placeholder:text-gray-400 disabled:opacity-50",
        class
    );

    let on_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                let value = input.value();
                bind_value.set(value.clone());
                if let Some(cb) = on_value {
                    cb.run(value);
                }
            }
        }
    };

    view! {
        <input
            data-name="Input"
            type="text"
            class=merged_class
            placeholder=placeholder
            id=id
            disabled=move || disabled.get()
            prop:value=move || bind_value.get()
            on:input=on_input
        />
    }
}
