use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::projects::{get_projects, get_tags};
use crate::projects::{Project, GLOBAL_PROJECT_CACHE};

#[server(input = GetUrl)]
pub async fn get_projects_server(tag: String) -> Result<Vec<Project>, ServerFnError> {
    get_projects(tag)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(input = GetUrl)]
pub async fn get_tags_server() -> Result<Vec<String>, ServerFnError> {
    get_tags().await.map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project { meta, content_html } = project;
    view! {
        <article class="flex flex-col p-6 rounded-2xl bg-white/80 dark:bg-gray-800/80 shadow-lg hover:shadow-2xl hover:-translate-y-1 transition-all duration-300">
            <div class="flex items-center justify-between mb-2">
                <h3 class="text-xl font-bold text-gray-900 dark:text-white">{meta.title}</h3>
                {meta
                    .featured
                    .then(|| {
                        view! {
                            <span class="text-xs font-semibold px-2 py-1 rounded-full bg-purple-100 text-purple-700 dark:bg-purple-900 dark:text-purple-200">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <p class="text-sm text-gray-500 dark:text-gray-400 mb-3">
                {meta.date.format("%b %Y").to_string()}
            </p>
            <p class="text-gray-700 dark:text-gray-300 mb-4">{meta.description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {meta
                    .tags
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <span class="text-xs px-2 py-1 rounded bg-blue-100 text-blue-700 dark:bg-blue-900 dark:text-blue-200">
                                {tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <details class="mb-4 text-gray-700 dark:text-gray-300">
                <summary class="cursor-pointer text-sm font-medium text-blue-600 dark:text-blue-400">
                    "Read more"
                </summary>
                <div class="prose dark:prose-invert max-w-none mt-3" inner_html=content_html></div>
            </details>
            <div class="mt-auto flex gap-4 text-sm font-medium">
                {meta
                    .repo
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="text-gray-900 dark:text-white hover:underline">
                                "Source →"
                            </a>
                        }
                    })}
                {meta
                    .demo
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="text-blue-600 dark:text-blue-400 hover:underline">
                                "Live demo →"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (tag, set_tag) = signal(String::new());
    let tags = OnceResource::new(get_tags_server());
    let projects = Resource::new(move || tag.get(), move |tag| async move {
        let cache = &*GLOBAL_PROJECT_CACHE;
        if let Some(p) = cache.get(&tag) {
            return Ok((*p).clone());
        }
        let projects = get_projects_server(tag.clone()).await?;
        // the server keeps its own cache, only fill this one in the browser
        #[cfg(feature = "hydrate")]
        cache.insert(tag, projects.clone());
        Ok::<_, ServerFnError>(projects)
    });

    let tag_button = move |label: String, value: String| {
        let active_value = value.clone();
        view! {
            <button
                type="button"
                class="px-4 py-1.5 rounded-full text-sm border transition-colors"
                class=(
                    ["bg-blue-600", "text-white", "border-blue-600"],
                    {
                        let active_value = active_value.clone();
                        move || tag.get() == active_value
                    },
                )
                on:click=move |_| set_tag.set(value.clone())
            >
                {label}
            </button>
        }
    };

    view! {
        <section id="projects" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center text-gray-900 dark:text-white mb-4">
                    "Projects"
                </h2>
                <p class="text-center text-gray-600 dark:text-gray-300 mb-8">
                    "A few things I've designed and built."
                </p>
                <div class="flex flex-wrap justify-center gap-2 mb-10 text-gray-700 dark:text-gray-200">
                    {tag_button("All".to_string(), String::new())}
                    <Suspense>
                        {move || Suspend::new(async move {
                            tags.await
                                .unwrap_or_default()
                                .into_iter()
                                .map(|t| tag_button(t.clone(), t))
                                .collect_view()
                        })}
                    </Suspense>
                </div>
                <Transition fallback=move || {
                    view! {
                        <div class="grid md:grid-cols-2 gap-8">
                            <div class="h-64 rounded-2xl bg-gray-200/60 dark:bg-gray-700/60 animate-pulse"></div>
                            <div class="h-64 rounded-2xl bg-gray-200/60 dark:bg-gray-700/60 animate-pulse"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match projects.await {
                            Ok(list) => {
                                Either::Left(
                                    view! {
                                        <div class="grid md:grid-cols-2 gap-8">
                                            {list
                                                .into_iter()
                                                .map(|project| view! { <ProjectCard project /> })
                                                .collect_view()}
                                        </div>
                                    },
                                )
                            }
                            Err(e) => {
                                Either::Right(
                                    view! {
                                        <p class="text-center text-red-600">
                                            {format!("Couldn't load projects: {e}")}
                                        </p>
                                    },
                                )
                            }
                        }
                    })}
                </Transition>
            </div>
        </section>
    }
}
