use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:ring-2 focus-visible:ring-blue-500/40 hover:cursor-pointer select-none",
        variants: {
            variant: {
                Default: "bg-blue-600 text-white shadow-sm hover:bg-blue-700",
                Outline: "bg-white text-gray-700 shadow-sm hover:bg-gray-50",
                Ghost: "text-gray-600 hover:bg-gray-100",
                Destructive: "text-gray-500 hover:text-red-600",
            },
            size: {
                Default: "h-10 px-4 py-2",
                Sm: "h-8 gap-1 px-2",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}
