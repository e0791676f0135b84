use leptos::{ev::MouseEvent, prelude::*};
use leptos_meta::Title;

use crate::ambient::shell_style;
use crate::routes::Route;
use crate::shell::ShellState;
use crate::site::{format_build_time, BUILD_TIME, NAME};

use super::about::AboutSection;
use super::ambient::AmbientLayer;
use super::contact::ContactSection;
use super::header::Header;
use super::hero::HeroSection;
use super::projects::ProjectsSection;
use super::sidebar::Sidebar;
use super::tasks::TasksSection;

/// Page shell of the main route: owns the pointer, hover and sidebar state and
/// hands derived values down to the decorative layer and navigation chrome.
#[component]
pub fn MainPage() -> impl IntoView {
    let shell = RwSignal::new(ShellState::new());
    // pointer moves shouldn't wake everything that only cares about the flags
    let hovering = Memo::new(move |_| shell.with(|s| s.hovering));
    let sidebar_open = Memo::new(move |_| shell.with(|s| s.sidebar_open));

    let toggle_sidebar = Callback::new(move |_: ()| {
        shell.update(|s| s.toggle_sidebar());
        log::debug!("sidebar open: {}", shell.with_untracked(|s| s.sidebar_open));
    });
    let close_sidebar = Callback::new(move |_: ()| shell.update(|s| s.close_sidebar()));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && shell.with_untracked(|s| s.sidebar_open) {
                shell.update(|s| s.close_sidebar());
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_mouse_move = move |ev: MouseEvent| {
        shell.update(|s| s.pointer_moved(ev.client_x() as f64, ev.client_y() as f64));
    };

    view! {
        <Title text=Route::Main.title() />
        <div
            class="min-h-screen relative overflow-hidden transition-colors duration-1000"
            style=move || shell_style(hovering.get())
            on:mousemove=on_mouse_move
            on:mouseenter=move |_| shell.update(|s| s.pointer_entered())
            on:mouseleave=move |_| shell.update(|s| s.pointer_left())
        >
            <AmbientLayer shell hovering />

            <Header sidebar_open on_toggle=toggle_sidebar />
            <Sidebar is_open=sidebar_open on_close=close_sidebar />

            <main class="pt-16 relative z-10">
                <HeroSection />
                <AboutSection />
                <ProjectsSection />
                <TasksSection />
                <ContactSection />
            </main>

            <footer class="relative z-10 py-8 text-center text-sm text-gray-500 dark:text-gray-400">
                {format!("© {NAME}")}
                " · built "
                {format_build_time(BUILD_TIME)}
            </footer>
        </div>
    }
}
