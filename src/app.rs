mod about;
mod ambient;
mod auth;
mod contact;
mod header;
mod hero;
mod main_page;
mod projects;
mod sidebar;
mod tasks;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::routes::Route as SiteRoute;
use crate::site::NAME;
use crate::theme::Theme;

use auth::{LoginForm, SignupForm};
use main_page::MainPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    {
        let (stored_theme, set_stored_theme, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        Effect::watch(
            || (),
            move |_, _, _| theme.set(stored_theme.get_untracked()),
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |t, _, _| {
                log::debug!("theme changed to {t:?}");
                set_stored_theme.set(*t);
            },
            false,
        );
    }

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />
        <Meta name="description" content=crate::site::TAGLINE />

        <Router>
            <div class="App" class:dark=move || theme.get().is_dark()>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=MainPage />
                    <Route path=path!("/login") view=LoginForm />
                    <Route path=path!("/signup") view=SignupForm />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=SiteRoute::NotFound.title() />
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-white">
            <h1 class="text-6xl font-bold">"404"</h1>
            <p class="text-lg text-gray-600 dark:text-gray-300">"This page drifted away."</p>
            <A
                href=SiteRoute::Main.path()
                attr:class="px-6 py-3 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold"
            >
                "Back home"
            </A>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use leptos_router::location::RequestUrl;

    fn render(path: &str) -> String {
        // the main page starts project resources, which need a spawner
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(path));
            view! { <App /> }.to_html()
        })
    }

    #[tokio::test]
    async fn test_main_route_renders_sections() {
        let html = render("/");
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains(r#"id="contact""#));
        assert!(!html.contains("login-email"));
        assert!(!html.contains("signup-email"));
    }

    #[tokio::test]
    async fn test_login_route_renders_only_login() {
        let html = render("/login");
        assert!(html.contains("login-email"));
        assert!(!html.contains("signup-email"));
        assert!(!html.contains(r#"id="home""#));
    }

    #[tokio::test]
    async fn test_signup_route_renders_only_signup() {
        let html = render("/signup");
        assert!(html.contains("signup-email"));
        assert!(!html.contains("login-email"));
        assert!(!html.contains(r#"id="home""#));
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found() {
        let html = render("/blog");
        assert!(html.contains("404"));
        assert!(!html.contains(r#"id="home""#));
        assert!(!html.contains("login-email"));
    }
}
