use leptos::{either::Either, ev::SubmitEvent, html::Input, prelude::*};
use leptos_meta::Title;
use leptos_router::components::A;

use crate::forms::{FormError, LoginRequest, SignupRequest};
use crate::routes::Route;

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1";

fn value_of(input: NodeRef<Input>) -> String {
    input.get().map(|i| i.value()).unwrap_or_default()
}

/// Outcome line shown under a form once it's been submitted.
#[component]
fn FormStatus(status: ReadSignal<Option<Result<String, FormError>>>) -> impl IntoView {
    move || {
        status.get().map(|s| match s {
            Ok(msg) => Either::Left(view! { <p class="text-sm text-green-600">{msg}</p> }),
            Err(e) => {
                Either::Right(view! { <p class="text-sm text-red-600" role="alert">{e.to_string()}</p> })
            }
        })
    }
}

#[component]
fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Title text=title />
        <div class="min-h-screen flex items-center justify-center px-4 bg-gradient-to-br from-blue-50 via-white to-purple-50 dark:from-gray-900 dark:via-gray-900 dark:to-gray-800">
            <div class="w-full max-w-md p-8 rounded-2xl bg-white/90 dark:bg-gray-800/90 shadow-xl">
                <h1 class="text-3xl font-bold text-center text-gray-900 dark:text-white mb-6">
                    {title}
                </h1>
                {children()}
                <p class="mt-6 text-center text-sm">
                    <A
                        href=Route::Main.path()
                        attr:class="text-gray-500 dark:text-gray-400 hover:underline"
                    >
                        "← Back home"
                    </A>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let email = NodeRef::<Input>::new();
    let password = NodeRef::<Input>::new();
    let remember = NodeRef::<Input>::new();
    let (status, set_status) = signal(None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            email: value_of(email),
            password: value_of(password),
            remember: remember.get().map(|i| i.checked()).unwrap_or(false),
        };
        let result = request.validate().map(|_| {
            log::info!("login submitted for {}", request.email.trim());
            format!("Welcome back, {}!", request.email.trim())
        });
        set_status.set(Some(result));
    };

    view! {
        <AuthCard title=Route::Login.title()>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label for="login-email" class=LABEL_CLASS>"Email"</label>
                    <input id="login-email" node_ref=email type="email" autocomplete="email" required class=INPUT_CLASS />
                </div>
                <div>
                    <label for="login-password" class=LABEL_CLASS>"Password"</label>
                    <input
                        id="login-password"
                        node_ref=password
                        type="password"
                        autocomplete="current-password"
                        required
                        class=INPUT_CLASS
                    />
                </div>
                <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                    <input node_ref=remember type="checkbox" class="accent-blue-600" />
                    "Remember me"
                </label>
                <FormStatus status />
                <button
                    type="submit"
                    class="w-full py-3 rounded-lg bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold hover:shadow-lg transition-shadow"
                >
                    "Log in"
                </button>
            </form>
            <p class="mt-4 text-center text-sm text-gray-600 dark:text-gray-300">
                "New here? "
                <A href=Route::Signup.path() attr:class="text-blue-600 dark:text-blue-400 hover:underline">
                    "Create an account"
                </A>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn SignupForm() -> impl IntoView {
    let name = NodeRef::<Input>::new();
    let email = NodeRef::<Input>::new();
    let password = NodeRef::<Input>::new();
    let confirm = NodeRef::<Input>::new();
    let (status, set_status) = signal(None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = SignupRequest {
            name: value_of(name),
            email: value_of(email),
            password: value_of(password),
            confirm_password: value_of(confirm),
        };
        let result = request.validate().map(|_| {
            log::info!("signup submitted for {}", request.email.trim());
            format!("Thanks, {}! Your account is ready.", request.name.trim())
        });
        set_status.set(Some(result));
    };

    view! {
        <AuthCard title=Route::Signup.title()>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label for="signup-name" class=LABEL_CLASS>"Name"</label>
                    <input id="signup-name" node_ref=name type="text" autocomplete="name" required class=INPUT_CLASS />
                </div>
                <div>
                    <label for="signup-email" class=LABEL_CLASS>"Email"</label>
                    <input id="signup-email" node_ref=email type="email" autocomplete="email" required class=INPUT_CLASS />
                </div>
                <div>
                    <label for="signup-password" class=LABEL_CLASS>"Password"</label>
                    <input
                        id="signup-password"
                        node_ref=password
                        type="password"
                        autocomplete="new-password"
                        required
                        class=INPUT_CLASS
                    />
                </div>
                <div>
                    <label for="signup-confirm" class=LABEL_CLASS>"Confirm password"</label>
                    <input
                        id="signup-confirm"
                        node_ref=confirm
                        type="password"
                        autocomplete="new-password"
                        required
                        class=INPUT_CLASS
                    />
                </div>
                <FormStatus status />
                <button
                    type="submit"
                    class="w-full py-3 rounded-lg bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold hover:shadow-lg transition-shadow"
                >
                    "Sign up"
                </button>
            </form>
            <p class="mt-4 text-center text-sm text-gray-600 dark:text-gray-300">
                "Already have an account? "
                <A href=Route::Login.path() attr:class="text-blue-600 dark:text-blue-400 hover:underline">
                    "Log in"
                </A>
            </p>
        </AuthCard>
    }
}
