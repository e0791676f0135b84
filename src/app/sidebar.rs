use leptos::prelude::*;
use leptos_router::components::*;

use crate::routes::{Route, SECTIONS};

#[component]
pub fn Sidebar(#[prop(into)] is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-40 bg-black/40 transition-opacity duration-300"
                } else {
                    "fixed inset-0 z-40 bg-black/40 transition-opacity duration-300 opacity-0 pointer-events-none"
                }
            }
            on:click=move |_| on_close.run(())
        ></div>
        <aside
            id="sidebar"
            class="fixed top-0 right-0 z-50 h-full w-72 bg-white dark:bg-gray-900 shadow-2xl transition-transform duration-300 ease-in-out"
            class:translate-x-full=move || !is_open.get()
            aria-hidden=move || (!is_open.get()).to_string()
        >
            <div class="flex items-center justify-between px-6 h-16 border-b border-gray-200 dark:border-gray-700">
                <span class="font-semibold text-gray-900 dark:text-white">"Menu"</span>
                <button
                    type="button"
                    class="text-2xl text-gray-500 hover:text-gray-900 dark:hover:text-white"
                    aria-label="Close navigation"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </div>
            <nav class="flex flex-col px-6 py-4 gap-1">
                {SECTIONS
                    .iter()
                    .map(|s| {
                        view! {
                            <a
                                href=s.anchor()
                                class="px-3 py-2 rounded-md text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-800"
                                on:click=move |_| on_close.run(())
                            >
                                {s.label}
                            </a>
                        }
                    })
                    .collect_view()}
                <div class="my-3 border-t border-gray-200 dark:border-gray-700"></div>
                <A
                    href=Route::Login.path()
                    attr:class="px-3 py-2 rounded-md text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-800"
                >
                    "Log in"
                </A>
                <A
                    href=Route::Signup.path()
                    attr:class="px-3 py-2 rounded-md text-white bg-gradient-to-r from-blue-600 to-purple-600 text-center"
                >
                    "Sign up"
                </A>
            </nav>
        </aside>
    }
}
