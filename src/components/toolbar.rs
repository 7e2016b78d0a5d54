use crate::components::rich_text::RichTextSurface;
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use leptos::prelude::*;

struct Tool {
    label: &'static str,
    tooltip: &'static str,
    command: &'static str,
    /// Block tag for `formatBlock` tools.
    block: Option<&'static str>,
}

const FORMAT_TOOLS: &[Tool] = &[
    Tool {
        label: "B",
        tooltip: "Bold",
        command: "bold",
        block: None,
    },
    Tool {
        label: "I",
        tooltip: "Italic",
        command: "italic",
        block: None,
    },
    Tool {
        label: "•",
        tooltip: "Bullet List",
        command: "insertUnorderedList",
        block: None,
    },
    Tool {
        label: "1.",
        tooltip: "Numbered List",
        command: "insertOrderedList",
        block: None,
    },
    Tool {
        label: "❝",
        tooltip: "Quote",
        command: "formatBlock",
        block: Some("blockquote"),
    },
    Tool {
        label: "</>",
        tooltip: "Code",
        command: "formatBlock",
        block: Some("pre"),
    },
    Tool {
        label: "H1",
        tooltip: "Heading 1",
        command: "formatBlock",
        block: Some("h1"),
    },
    Tool {
        label: "H2",
        tooltip: "Heading 2",
        command: "formatBlock",
        block: Some("h2"),
    },
];

const HISTORY_TOOLS: &[Tool] = &[
    Tool {
        label: "↶",
        tooltip: "Undo",
        command: "undo",
        block: None,
    },
    Tool {
        label: "↷",
        tooltip: "Redo",
        command: "redo",
        block: None,
    },
];

/// Formatting commands for the rich-text surface. Every command reports the
/// resulting content through `on_change`.
#[component]
pub(crate) fn Toolbar(
    surface: RichTextSurface,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let run = move |tool: &'static Tool| {
        // Toggling a block off restores a plain paragraph.
        let value = match tool.block {
            Some(tag) if surface.is_active(tool.command, Some(tag)) => Some("p"),
            other => other,
        };
        if surface.exec(tool.command, value) {
            on_change.run(surface.get_content());
        }
    };

    let format_buttons = FORMAT_TOOLS
        .iter()
        .map(|tool| {
            let active = move || {
                surface.track();
                surface.is_active(tool.command, tool.block).to_string()
            };
            view! {
                <Button
                    variant=ButtonVariant::Ghost
                    class="data-[active=true]:bg-blue-50 data-[active=true]:text-blue-600"
                    attr:data-active=active
                    size=ButtonSize::Sm
                    attr:title=tool.tooltip
                    on:mousedown=move |ev: web_sys::MouseEvent| ev.prevent_default()
                    on:click=move |_| run(tool)
                >
                    <span class="font-semibold">{tool.label}</span>
                </Button>
            }
        })
        .collect_view();

    let history_buttons = HISTORY_TOOLS
        .iter()
        .map(|tool| {
            view! {
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:title=tool.tooltip
                    attr:disabled=move || {
                        surface.track();
                        !surface.can(tool.command)
                    }
                    on:mousedown=move |ev: web_sys::MouseEvent| ev.prevent_default()
                    on:click=move |_| run(tool)
                >
                    {tool.label}
                </Button>
            }
        })
        .collect_view();

    view! {
        <div class="flex items-center gap-1 border-b border-gray-200 bg-white p-2">
            {format_buttons}
            <div class="mx-2 h-6 w-px bg-gray-200" />
            {history_buttons}
        </div>
    }
}
