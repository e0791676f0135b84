use leptos::{either::Either, ev::SubmitEvent, html::Input, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::tasks::{Task, TaskFilter, TaskList, MAX_TITLE_LEN};

#[component]
fn TaskItem(task: Task, tasks: RwSignal<TaskList>) -> impl IntoView {
    let id = task.id;
    let title_class = if task.done {
        "flex-1 text-gray-800 dark:text-gray-100 line-through opacity-60"
    } else {
        "flex-1 text-gray-800 dark:text-gray-100"
    };
    view! {
        <li class="flex items-center gap-3 py-3 px-4 rounded-lg bg-white/70 dark:bg-gray-800/70">
            <input
                type="checkbox"
                class="h-5 w-5 accent-blue-600"
                prop:checked=task.done
                on:change=move |_| {
                    tasks.update(|t| _ = t.toggle(id));
                }
            />
            <span class=title_class>
                {task.title}
            </span>
            <button
                type="button"
                class="text-sm text-red-500 hover:text-red-700"
                aria-label="Remove task"
                on:click=move |_| {
                    tasks.update(|t| _ = t.remove(id));
                }
            >
                "✕"
            </button>
        </li>
    }
}

#[component]
pub fn TasksSection() -> impl IntoView {
    let tasks = RwSignal::new(TaskList::new());
    let (filter, set_filter) = signal(TaskFilter::default());
    let (error, set_error) = signal(None::<String>);
    let input_ref = NodeRef::<Input>::new();

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<TaskList, JsonSerdeWasmCodec>("tasks");
        Effect::watch(
            || (),
            move |_, _, _| {
                let mut restored = stored.get_untracked();
                restored.normalize();
                tasks.set(restored);
            },
            true,
        );
        Effect::watch(
            move || tasks.get(),
            move |t, _, _| set_stored.set(t.clone()),
            false,
        );
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get() else {
            return;
        };
        let mut added = None;
        tasks.update(|t| added = Some(t.add(&input.value())));
        match added {
            Some(Ok(id)) => {
                log::debug!("added task {id}");
                input.set_value("");
                set_error.set(None);
            }
            Some(Err(e)) => set_error.set(Some(e.to_string())),
            None => {}
        }
    };

    view! {
        <section id="tasks" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-2xl mx-auto">
                <h2 class="text-4xl font-bold text-center text-gray-900 dark:text-white mb-4">
                    "Tasks"
                </h2>
                <p class="text-center text-gray-600 dark:text-gray-300 mb-8">
                    "A tiny to-do list that lives in your browser."
                </p>
                <form class="flex gap-2 mb-2" on:submit=on_submit>
                    <input
                        node_ref=input_ref
                        type="text"
                        placeholder="What needs doing?"
                        maxlength=MAX_TITLE_LEN.to_string()
                        class="flex-1 px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <button
                        type="submit"
                        class="px-5 py-2 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700"
                    >
                        "Add"
                    </button>
                </form>
                <p class="h-6 text-sm text-red-600">{move || error.get()}</p>

                <div class="flex items-center justify-between my-4 text-sm text-gray-600 dark:text-gray-300">
                    <span>
                        {move || {
                            let n = tasks.with(|t| t.remaining());
                            format!("{n} {} left", if n == 1 { "item" } else { "items" })
                        }}
                    </span>
                    <div class="flex gap-2">
                        {TaskFilter::all()
                            .into_iter()
                            .map(|f| {
                                view! {
                                    <button
                                        type="button"
                                        class="px-3 py-1 rounded-full"
                                        class=(["bg-blue-600", "text-white"], move || filter.get() == f)
                                        on:click=move |_| set_filter.set(f)
                                    >
                                        {f.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        type="button"
                        class="hover:underline disabled:opacity-40"
                        disabled=move || tasks.with(|t| t.remaining() == t.len())
                        on:click=move |_| tasks.update(|t| t.clear_completed())
                    >
                        "Clear completed"
                    </button>
                </div>

                {move || {
                    let visible = tasks.with(|t| t.filtered(filter.get()));
                    if visible.is_empty() {
                        Either::Left(
                            view! {
                                <p class="text-center text-gray-500 dark:text-gray-400 py-6">
                                    "Nothing here yet."
                                </p>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <ul class="space-y-2">
                                    {visible
                                        .into_iter()
                                        .map(|task| view! { <TaskItem task tasks /> })
                                        .collect_view()}
                                </ul>
                            },
                        )
                    }
                }}
            </div>
        </section>
    }
}
