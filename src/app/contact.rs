use leptos::prelude::*;

use crate::site::{EMAIL, GITHUB, LINKEDIN, LOCATION};

#[component]
pub fn ContactSection() -> impl IntoView {
    let copy_email = format!(
        "navigator.clipboard.writeText('{EMAIL}').then(() => alert('📋 Email copied: {EMAIL}'))"
    );

    view! {
        <section id="contact" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-2xl mx-auto text-center">
                <h2 class="text-4xl font-bold text-gray-900 dark:text-white mb-4">"Let's Connect"</h2>
                <p class="text-lg text-gray-600 dark:text-gray-300 mb-8">
                    "Have a project in mind, a question, or just want to say hi? My inbox is always open."
                </p>
                <div class="bg-white/70 dark:bg-gray-800/70 p-8 rounded-2xl shadow-lg space-y-6">
                    <button
                        type="button"
                        class="px-6 py-3 rounded-full font-medium text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:scale-105 transition-transform"
                        onclick=copy_email
                    >
                        {format!("📧 {EMAIL}")}
                    </button>
                    <p class="text-gray-600 dark:text-gray-400">{format!("📍 {LOCATION}")}</p>
                    <div class="flex justify-center gap-6 text-gray-700 dark:text-gray-300">
                        <a
                            href=GITHUB
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-blue-600 dark:hover:text-blue-400"
                            aria-label="GitHub Profile"
                        >
                            "GitHub"
                        </a>
                        <a
                            href=LINKEDIN
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-blue-600 dark:hover:text-blue-400"
                            aria-label="LinkedIn Profile"
                        >
                            "LinkedIn"
                        </a>
                        <a href=format!("mailto:{EMAIL}") class="hover:text-blue-600 dark:hover:text-blue-400">
                            "Email"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
