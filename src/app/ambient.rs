use leptos::prelude::*;

use crate::ambient::{
    floating_circles, grid_style, lines, orbs, overlay_style, particles, pointer_effects, waves,
    Decoration, PointerEffect, STYLESHEET,
};
use crate::shell::ShellState;

#[component]
fn Pinned(decoration: Decoration, hovering: Memo<bool>) -> impl IntoView {
    let class = decoration.class;
    view! { <div class=class style=move || decoration.style(hovering.get())></div> }
}

#[component]
fn Chaser(effect: PointerEffect, shell: RwSignal<ShellState>) -> impl IntoView {
    let wrapper_class = effect.wrapper_class;
    let class = effect.class;
    let inner_style = effect.inner_style();
    view! {
        <div class=wrapper_class style=move || shell.with(|s| effect.wrapper_style(s))>
            <div class=class style=inner_style></div>
        </div>
    }
}

/// Non-interactive animated backdrop of the main page.
#[component]
pub fn AmbientLayer(shell: RwSignal<ShellState>, hovering: Memo<bool>) -> impl IntoView {
    let pinned = |list: Vec<Decoration>| {
        list.into_iter()
            .map(|decoration| view! { <Pinned decoration hovering /> })
            .collect_view()
    };

    view! {
        <style inner_html=STYLESHEET.as_str()></style>
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {pinned(floating_circles())}

            <div class="absolute inset-0 opacity-5">
                <div class="w-full h-full" style=move || grid_style(hovering.get())></div>
            </div>

            <div class="absolute inset-0" style=move || overlay_style(hovering.get())></div>

            {pinned(particles())}
            {pinned(waves())}
            {pinned(orbs())}
            {pinned(lines())}

            {pointer_effects()
                .into_iter()
                .map(|effect| view! { <Chaser effect shell /> })
                .collect_view()}
        </div>
    }
}
