use leptos::{either::Either, prelude::*};
use leptos_router::components::*;

use crate::routes::{Route, SECTIONS};
use crate::site::NAME;
use crate::theme::Theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    view! {
        <button
            type="button"
            class="w-9 h-9 flex items-center justify-center rounded-full hover:bg-white/20 transition-colors"
            aria-label="Toggle dark mode"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || theme.get().toggle_label()}
        </button>
    }
}

#[component]
pub fn Header(#[prop(into)] sidebar_open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <header class="fixed top-0 inset-x-0 z-40 backdrop-blur-md bg-white/70 dark:bg-gray-900/70 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <A
                    href=Route::Main.path()
                    attr:class="text-xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-purple-600"
                >
                    {NAME}
                </A>
                <nav class="hidden md:flex items-center gap-6 text-gray-700 dark:text-gray-200">
                    {SECTIONS
                        .iter()
                        .map(|s| {
                            view! {
                                <a href=s.href() class="hover:text-blue-600 dark:hover:text-blue-400 transition-colors">
                                    {s.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <A
                        href=Route::Login.path()
                        attr:class="px-4 py-1.5 rounded-full border border-gray-300 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                    >
                        "Log in"
                    </A>
                </nav>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="w-9 h-9 flex items-center justify-center rounded-md text-gray-700 dark:text-gray-200 hover:bg-white/20"
                        aria-label="Toggle navigation"
                        aria-controls="sidebar"
                        aria-expanded=move || sidebar_open.get().to_string()
                        on:click=move |_| on_toggle.run(())
                    >
                        {move || {
                            if sidebar_open.get() {
                                Either::Left(view! { <span class="text-2xl leading-none">"×"</span> })
                            } else {
                                Either::Right(view! { <span class="text-2xl leading-none">"☰"</span> })
                            }
                        }}
                    </button>
                </div>
            </div>
        </header>
    }
}
