use leptos::prelude::*;

const SKILLS: [(&str, &str); 4] = [
    ("Frontend", "TypeScript, React, Leptos, WebAssembly, Tailwind CSS, CSS animation"),
    ("Backend", "Rust, Node.js, Axum, PostgreSQL, REST and server functions"),
    ("Design", "Figma, design systems, illustration, prototyping, accessibility"),
    ("Tooling", "Git, GitHub Actions, Docker, Vite, cargo-leptos"),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center text-gray-900 dark:text-white mb-12">
                    "About Me"
                </h2>
                <div class="grid md:grid-cols-2 gap-12 items-start">
                    <div class="space-y-4 text-lg text-gray-700 dark:text-gray-300 leading-relaxed">
                        <p>
                            "I'm a developer who cares about the feel of an interface as much as the code behind it. "
                            "Most of my work sits where "<strong>"engineering meets design"</strong>
                            ": interactive sites, motion systems and small tools people enjoy using."
                        </p>
                        <p>
                            "I like shipping things end to end, from the first sketch to the deployed build, and I keep "
                            "performance and accessibility in mind at every step."
                        </p>
                        <div class="bg-white/60 dark:bg-gray-800/60 p-4 rounded-lg border-l-4 border-purple-500">
                            <p class="text-base text-purple-700 dark:text-purple-300 font-medium">
                                "💡 Currently open to freelance work and collaborations."
                            </p>
                        </div>
                    </div>
                    <div class="grid sm:grid-cols-2 gap-4">
                        {SKILLS
                            .iter()
                            .map(|(area, list)| {
                                view! {
                                    <div class="p-5 rounded-xl bg-white/70 dark:bg-gray-800/70 shadow-md hover:shadow-xl hover:-translate-y-1 transition-all duration-300">
                                        <h3 class="font-semibold text-gray-900 dark:text-white mb-2">{*area}</h3>
                                        <p class="text-sm text-gray-600 dark:text-gray-400">{*list}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
