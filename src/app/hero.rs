use leptos::prelude::*;

use crate::ambient::{hero_circles, hero_entrance_style, scroll_hint_motion};
use crate::site::{NAME, RESUME, TAGLINE};

#[component]
pub fn HeroSection() -> impl IntoView {
    let scroll_hint = format!("animation: {}", scroll_hint_motion().animation_css());

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-blue-50 via-white to-purple-50 dark:from-gray-900 dark:via-gray-800 dark:to-purple-900"
        >
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                {hero_circles()
                    .into_iter()
                    .map(|d| view! { <div class=d.class style=d.style(false)></div> })
                    .collect_view()}
            </div>

            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center relative z-10">
                <h1
                    class="text-5xl md:text-7xl font-bold text-gray-900 dark:text-white mb-6"
                    style=hero_entrance_style(0)
                >
                    "Hi, I'm "
                    <span class="inline-block text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-purple-600 transition-transform duration-200 hover:scale-105">
                        {NAME}
                    </span>
                </h1>

                <p
                    class="text-xl md:text-2xl text-gray-600 dark:text-gray-300 mb-8 max-w-2xl mx-auto leading-relaxed"
                    style=hero_entrance_style(1)
                >
                    {TAGLINE}
                </p>

                <div
                    class="flex flex-col sm:flex-row gap-4 justify-center items-center"
                    style=hero_entrance_style(2)
                >
                    <a
                        href=RESUME
                        download="resume.pdf"
                        class="px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-full font-semibold text-lg shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-105 hover:-translate-y-0.5 active:scale-95 flex items-center gap-2"
                    >
                        <span aria-hidden="true">"⬇"</span>
                        "Download Resume"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-4 border-2 border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 rounded-full font-semibold text-lg hover:bg-gray-50 dark:hover:bg-gray-800 transition-all duration-300 hover:scale-105 hover:-translate-y-0.5 active:scale-95 flex items-center gap-2"
                    >
                        <span aria-hidden="true">"✉"</span>
                        "Get In Touch"
                    </a>
                </div>

                <div class="mt-16" style=hero_entrance_style(3)>
                    <div class="flex justify-center" style=scroll_hint>
                        <a
                            href="#about"
                            class="text-gray-500 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                            aria-label="Scroll to about"
                        >
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="32"
                                height="32"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            >
                                <path d="m6 9 6 6 6-6" />
                            </svg>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
