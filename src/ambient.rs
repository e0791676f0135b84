//! Catalog of decorative visuals layered over the main page.
//!
//! Everything here is a pure function of [`ShellState`] (or of nothing at
//! all), so the page components only decide *where* to render the results.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::motion::{num, Easing, Keyframes, Motion, Prop, Spring, Transform, Tween};
use crate::shell::ShellState;

pub const IDLE_BACKGROUND: &str = "linear-gradient(135deg, #f7fafc 0%, #edf2f7 100%)";
pub const HOVER_BACKGROUND: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";
const OVERLAY_GRADIENT: &str = "linear-gradient(45deg, #667eea, #764ba2, #f093fb, #f5576c)";
const GRID_IMAGE: &str = "linear-gradient(rgba(59, 130, 246, 0.1) 1px, transparent 1px), linear-gradient(90deg, rgba(59, 130, 246, 0.1) 1px, transparent 1px)";

const FOLLOWER_SPRING: Spring = Spring {
    stiffness: 200.0,
    damping: 20.0,
    mass: 0.1,
};

/// Every `@keyframes` rule used by the page, built once.
pub static STYLESHEET: LazyLock<String> = LazyLock::new(stylesheet);

pub fn background(hovering: bool) -> &'static str {
    if hovering {
        HOVER_BACKGROUND
    } else {
        IDLE_BACKGROUND
    }
}

pub fn shell_style(hovering: bool) -> String {
    format!("background: {}", background(hovering))
}

pub fn overlay_style(hovering: bool) -> String {
    let (opacity, fill) = if hovering {
        (0.3, OVERLAY_GRADIENT)
    } else {
        (0.0, "transparent")
    };
    format!(
        "opacity: {}; background: {fill}; transition: {}",
        num(opacity),
        Tween::new(0.8, Easing::EaseInOut).transition_css("opacity")
    )
}

pub fn grid_motion() -> Motion {
    Motion::new(
        "ambient-grid",
        Keyframes::new().track(Prop::BackgroundPosition, [0.0, 100.0]),
        Tween::linear(30.0).looping(),
    )
}

pub fn grid_style(hovering: bool) -> String {
    let opacity = if hovering { 0.1 } else { 0.05 };
    format!(
        "background-image: {GRID_IMAGE}; background-size: 50px 50px; opacity: {}; animation: {}; transition: {}",
        num(opacity),
        grid_motion().animation_css(),
        Tween::linear(30.0).transition_css("opacity"),
    )
}

/// A looping element pinned to a fixed spot of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub key: String,
    pub class: &'static str,
    pub placement: String,
    pub idle: Motion,
    /// Replaces `idle` while the pointer is over the shell.
    pub hover: Option<Motion>,
}

impl Decoration {
    fn new(key: impl Into<String>, class: &'static str, idle: Motion) -> Self {
        Self {
            key: key.into(),
            class,
            placement: String::new(),
            idle,
            hover: None,
        }
    }

    fn placed(mut self, placement: impl Into<String>) -> Self {
        self.placement = placement.into();
        self
    }

    fn on_hover(mut self, motion: Motion) -> Self {
        self.hover = Some(motion);
        self
    }

    pub fn motion(&self, hovering: bool) -> &Motion {
        match (&self.hover, hovering) {
            (Some(m), true) => m,
            _ => &self.idle,
        }
    }

    pub fn style(&self, hovering: bool) -> String {
        let animation = format!("animation: {}", self.motion(hovering).animation_css());
        if self.placement.is_empty() {
            animation
        } else {
            format!("{}; {animation}", self.placement)
        }
    }

    fn motions(&self) -> impl Iterator<Item = &Motion> {
        std::iter::once(&self.idle).chain(self.hover.iter())
    }
}

/// How a pointer effect catches up with the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Follow {
    Spring(Spring),
    Tween(Tween),
}

impl Follow {
    pub fn transition_css(&self) -> String {
        match self {
            Follow::Spring(s) => s.transition_css("transform"),
            Follow::Tween(t) => Tween { delay: 0.0, ..*t }.transition_css("transform"),
        }
    }
}

/// An element that tracks the pointer.
///
/// The wrapper carries the pointer translation; the inner element carries an
/// optional looping pulse so the two transforms never fight.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEffect {
    pub key: String,
    pub wrapper_class: &'static str,
    pub class: &'static str,
    pub offset: (f64, f64),
    pub follow: Follow,
    /// (scale, rotation in degrees) applied while hovering.
    pub hover_transform: Option<(f64, f64)>,
    pub pulse: Option<Motion>,
}

impl PointerEffect {
    pub fn transform(&self, state: &ShellState) -> Transform {
        let at = state.pointer.offset(self.offset.0, self.offset.1);
        let t = Transform::new().translate(at.x, at.y);
        match self.hover_transform {
            Some((scale, rotate)) if state.hovering => t.scale(scale).rotate(rotate),
            Some(_) => t.scale(1.0).rotate(0.0),
            None => t,
        }
    }

    pub fn wrapper_style(&self, state: &ShellState) -> String {
        format!(
            "transform: {}; transition: {}",
            self.transform(state).css(),
            self.follow.transition_css()
        )
    }

    pub fn inner_style(&self) -> String {
        self.pulse
            .as_ref()
            .map(|m| format!("animation: {}", m.animation_css()))
            .unwrap_or_default()
    }
}

fn circle_motion(key: &str, x: f64, y: f64, rotate: f64, scale: [f64; 3], duration: f64) -> Motion {
    Motion::new(
        key,
        Keyframes::new()
            .track(Prop::X, [0.0, x, 0.0])
            .track(Prop::Y, [0.0, y, 0.0])
            .track(Prop::Rotate, [0.0, rotate / 2.0, rotate])
            .track(Prop::Scale, scale),
        Tween::linear(duration).looping(),
    )
}

pub fn floating_circles() -> Vec<Decoration> {
    vec![
        Decoration::new(
            "circle-0",
            "absolute top-20 left-10 w-32 h-32 bg-blue-200 dark:bg-blue-800 rounded-full opacity-20 blur-xl",
            circle_motion("ambient-circle-0", 100.0, -50.0, 360.0, [1.0, 1.0, 1.0], 20.0),
        )
        .on_hover(circle_motion(
            "ambient-circle-0-hover",
            100.0,
            -50.0,
            360.0,
            [1.0, 1.2, 1.0],
            20.0,
        )),
        Decoration::new(
            "circle-1",
            "absolute top-40 right-20 w-24 h-24 bg-purple-200 dark:bg-purple-800 rounded-full opacity-20 blur-xl",
            circle_motion("ambient-circle-1", -80.0, 60.0, -360.0, [1.0, 1.0, 1.0], 25.0),
        ),
        Decoration::new(
            "circle-2",
            "absolute bottom-20 left-1/4 w-20 h-20 bg-green-200 dark:bg-green-800 rounded-full opacity-20 blur-xl",
            circle_motion("ambient-circle-2", 120.0, -30.0, 180.0, [1.0, 1.0, 1.0], 18.0),
        ),
        Decoration::new(
            "circle-3",
            "absolute bottom-40 right-1/3 w-28 h-28 bg-pink-200 dark:bg-pink-800 rounded-full opacity-20 blur-xl",
            circle_motion("ambient-circle-3", -60.0, 40.0, -180.0, [1.0, 1.0, 1.0], 22.0),
        ),
    ]
}

pub fn particles() -> Vec<Decoration> {
    (0..8)
        .map(|i| {
            let fi = i as f64;
            let tween = Tween::new(4.0 + fi * 0.5, Easing::EaseInOut)
                .looping()
                .with_delay(fi * 0.3);
            let rise = |name: String, sway: f64| {
                Motion::new(
                    name,
                    Keyframes::new()
                        .track(Prop::X, [0.0, sway, 0.0])
                        .track(Prop::Y, [0.0, -100.0, 0.0])
                        .track(Prop::Scale, [0.0, 1.0, 0.0])
                        .track(Prop::Opacity, [0.0, 1.0, 0.0]),
                    tween,
                )
            };
            Decoration::new(
                format!("particle-{i}"),
                "absolute w-2 h-2 bg-blue-400 dark:bg-blue-300 rounded-full",
                rise(format!("ambient-particle-{i}"), 0.0),
            )
            .placed(format!(
                "left: {}%; top: {}%",
                10 + i * 10,
                20 + (i % 3) * 20
            ))
            .on_hover(rise(format!("ambient-particle-{i}-hover"), 20.0))
        })
        .collect()
}

pub fn waves() -> Vec<Decoration> {
    vec![
        Decoration::new(
            "wave-0",
            "absolute bottom-0 left-0 w-full h-32 bg-gradient-to-r from-transparent via-blue-200 dark:via-blue-800 to-transparent opacity-10",
            Motion::new(
                "ambient-wave-0",
                Keyframes::new().track(Prop::XPercent, [-100.0, 100.0]),
                Tween::linear(15.0).looping(),
            ),
        )
        .placed("clip-path: polygon(0 50%, 100% 0%, 100% 100%, 0% 100%)"),
        Decoration::new(
            "wave-1",
            "absolute bottom-0 left-0 w-full h-24 bg-gradient-to-r from-transparent via-purple-200 dark:via-purple-800 to-transparent opacity-8",
            Motion::new(
                "ambient-wave-1",
                Keyframes::new().track(Prop::XPercent, [100.0, -100.0]),
                Tween::linear(20.0).looping(),
            ),
        )
        .placed("clip-path: polygon(0 70%, 100% 20%, 100% 100%, 0% 100%)"),
    ]
}

pub fn orbs() -> Vec<Decoration> {
    (0..5)
        .map(|i| {
            let fi = i as f64;
            Decoration::new(
                format!("orb-{i}"),
                "absolute w-4 h-4 bg-gradient-to-r from-blue-400 to-purple-400 dark:from-blue-300 dark:to-purple-300 rounded-full blur-sm",
                Motion::new(
                    format!("ambient-orb-{i}"),
                    Keyframes::new()
                        .track(Prop::Scale, [1.0, 1.5, 1.0])
                        .track(Prop::Opacity, [0.3, 0.6, 0.3]),
                    Tween::new(3.0 + fi, Easing::EaseInOut)
                        .looping()
                        .with_delay(fi * 0.5),
                ),
            )
            .placed(format!(
                "left: {}%; top: {}%",
                15 + i * 15,
                30 + (i % 2) * 30
            ))
        })
        .collect()
}

pub fn lines() -> Vec<Decoration> {
    (0..3)
        .map(|i| {
            Decoration::new(
                format!("line-{i}"),
                "absolute h-px bg-gradient-to-r from-transparent via-blue-400 dark:via-blue-300 to-transparent",
                Motion::new(
                    format!("ambient-line-{i}"),
                    Keyframes::new()
                        .track(Prop::ScaleX, [0.0, 1.0, 0.0])
                        .track(Prop::Opacity, [0.0, 0.5, 0.0]),
                    Tween::new(8.0, Easing::EaseInOut)
                        .looping()
                        .with_delay(i as f64 * 2.0),
                ),
            )
            .placed(format!(
                "left: {}%; top: {}%; width: 200px",
                20 + i * 20,
                40 + i * 10
            ))
        })
        .collect()
}

/// All pinned decorations of the page shell, back to front.
pub fn decorations() -> Vec<Decoration> {
    let mut all = floating_circles();
    all.extend(particles());
    all.extend(waves());
    all.extend(orbs());
    all.extend(lines());
    all
}

fn pulse(name: String, scale: f64, opacity: f64, tween: Tween) -> Motion {
    Motion::new(
        name,
        Keyframes::new()
            .track(Prop::Scale, [0.0, scale, 0.0])
            .track(Prop::Opacity, [0.0, opacity, 0.0]),
        tween,
    )
}

/// Effects that chase the pointer, front to back.
pub fn pointer_effects() -> Vec<PointerEffect> {
    let ripple = Tween::new(1.5, Easing::EaseOut).looping();
    let echo = Tween::new(2.0, Easing::EaseOut).looping().with_delay(0.5);
    let mut effects = vec![
        PointerEffect {
            key: "follower".to_string(),
            wrapper_class: "absolute top-0 left-0 z-50",
            class: "w-12 h-12 bg-gradient-to-r from-blue-400/40 to-purple-400/40 dark:from-blue-300/40 dark:to-purple-300/40 rounded-full blur-xl",
            offset: (-25.0, -25.0),
            follow: Follow::Spring(FOLLOWER_SPRING),
            hover_transform: Some((1.5, 180.0)),
            pulse: None,
        },
        PointerEffect {
            key: "ripple-0".to_string(),
            wrapper_class: "absolute top-0 left-0 z-40",
            class: "w-24 h-24 border-2 border-blue-400/50 dark:border-blue-300/50 rounded-full",
            offset: (-50.0, -50.0),
            follow: Follow::Tween(ripple),
            hover_transform: None,
            pulse: Some(pulse("ambient-ripple-0".to_string(), 1.2, 0.4, ripple)),
        },
        PointerEffect {
            key: "ripple-1".to_string(),
            wrapper_class: "absolute top-0 left-0 z-30",
            class: "w-32 h-32 border border-purple-400/30 dark:border-purple-300/30 rounded-full",
            offset: (-75.0, -75.0),
            follow: Follow::Tween(echo),
            hover_transform: None,
            pulse: Some(pulse("ambient-ripple-1".to_string(), 1.5, 0.2, echo)),
        },
    ];
    effects.extend((0..3).map(|i| {
        let fi = i as f64;
        let tween = Tween::new(1.0, Easing::EaseOut)
            .looping()
            .with_delay(fi * 0.1);
        PointerEffect {
            key: format!("trail-{i}"),
            wrapper_class: "absolute top-0 left-0 z-20",
            class: "w-6 h-6 bg-gradient-to-r from-pink-400 to-orange-400 rounded-full",
            offset: (-15.0 + fi * 5.0, -15.0 + fi * 5.0),
            follow: Follow::Tween(tween),
            hover_transform: None,
            pulse: Some(pulse(format!("ambient-trail-{i}"), 1.0, 0.3 - fi * 0.1, tween)),
        }
    }));
    effects
}

/// Background circles of the hero section.
pub fn hero_circles() -> Vec<Decoration> {
    vec![
        Decoration::new(
            "hero-circle-0",
            "absolute top-10 left-10 w-32 h-32 bg-blue-200 dark:bg-blue-900 rounded-full opacity-20",
            Motion::new(
                "hero-circle-0",
                Keyframes::new()
                    .track(Prop::Rotate, [0.0, 360.0])
                    .track(Prop::Scale, [1.0, 1.2, 1.0]),
                Tween::linear(20.0).looping(),
            ),
        ),
        Decoration::new(
            "hero-circle-1",
            "absolute bottom-10 right-10 w-48 h-48 bg-purple-200 dark:bg-purple-900 rounded-full opacity-20",
            Motion::new(
                "hero-circle-1",
                Keyframes::new()
                    .track(Prop::Rotate, [360.0, 0.0])
                    .track(Prop::Scale, [1.0, 1.5, 1.0]),
                Tween::linear(25.0).looping(),
            ),
        ),
    ]
}

const HERO_STAGGER: f64 = 0.2;
const HERO_DELAY: f64 = 0.3;

fn hero_rise(delay: f64) -> Motion {
    Motion::new(
        "hero-rise",
        Keyframes::new()
            .track(Prop::Y, [20.0, 0.0])
            .track(Prop::Opacity, [0.0, 1.0]),
        Tween::new(0.6, Easing::EaseOut).with_delay(delay),
    )
}

/// Entrance animation of the `index`th hero child; children rise in sequence.
pub fn hero_entrance_style(index: usize) -> String {
    let delay = HERO_DELAY + HERO_STAGGER * index as f64;
    format!("animation: {}", hero_rise(delay).animation_css())
}

pub fn scroll_hint_motion() -> Motion {
    Motion::new(
        "hero-scroll-hint",
        Keyframes::new().track(Prop::Y, [0.0, 10.0, 0.0]),
        Tween::new(2.0, Easing::EaseInOut).looping(),
    )
}

fn stylesheet() -> String {
    let decorations = decorations();
    let hero = hero_circles();
    let effects = pointer_effects();
    let extra = [grid_motion(), hero_rise(0.0), scroll_hint_motion()];

    let motions = decorations
        .iter()
        .chain(hero.iter())
        .flat_map(|d| d.motions())
        .chain(effects.iter().filter_map(|e| e.pulse.as_ref()))
        .chain(extra.iter());

    let mut seen = HashSet::new();
    motions
        .filter(|m| seen.insert(m.name.clone()))
        .map(|m| m.keyframes_css())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_follows_hover() {
        assert_eq!(background(true), HOVER_BACKGROUND);
        assert_eq!(background(false), IDLE_BACKGROUND);
        assert!(shell_style(true).contains("#667eea"));
        assert!(shell_style(false).contains("#f7fafc"));
    }

    #[test]
    fn test_overlay_style() {
        let on = overlay_style(true);
        assert!(on.starts_with("opacity: 0.3; background: linear-gradient(45deg"));
        assert!(on.contains("opacity 0.8s ease-in-out"));
        assert!(overlay_style(false).starts_with("opacity: 0; background: transparent"));
    }

    #[test]
    fn test_grid_style() {
        assert!(grid_style(true).contains("opacity: 0.1;"));
        assert!(grid_style(false).contains("opacity: 0.05;"));
        assert!(grid_style(false).contains("ambient-grid 30s linear 0s infinite both"));
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(floating_circles().len(), 4);
        assert_eq!(particles().len(), 8);
        assert_eq!(waves().len(), 2);
        assert_eq!(orbs().len(), 5);
        assert_eq!(lines().len(), 3);
        assert_eq!(decorations().len(), 22);
        assert_eq!(pointer_effects().len(), 6);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys = HashSet::new();
        for d in decorations().iter().chain(hero_circles().iter()) {
            assert!(keys.insert(d.key.clone()), "duplicate key {}", d.key);
        }
        for e in pointer_effects() {
            assert!(keys.insert(e.key.clone()), "duplicate key {}", e.key);
        }
    }

    #[test]
    fn test_particle_layout() {
        let particles = particles();
        assert_eq!(particles[0].placement, "left: 10%; top: 20%");
        assert_eq!(particles[4].placement, "left: 50%; top: 40%");
        assert_eq!(particles[7].placement, "left: 80%; top: 40%");
        assert_eq!(
            particles[3].idle.animation_css(),
            "ambient-particle-3 5.5s ease-in-out 0.9s infinite both"
        );
    }

    #[test]
    fn test_hover_swaps_motion() {
        let circles = floating_circles();
        assert_eq!(circles[0].motion(false).name, "ambient-circle-0");
        assert_eq!(circles[0].motion(true).name, "ambient-circle-0-hover");
        // circles without a hover variant keep looping unchanged
        assert_eq!(circles[1].motion(true).name, "ambient-circle-1");

        let particle = &particles()[2];
        assert!(particle.style(true).contains("ambient-particle-2-hover"));
        assert!(particle.style(false).starts_with("left: 30%; top: 60%; animation: ambient-particle-2 "));
    }

    #[test]
    fn test_orb_and_line_layout() {
        let orbs = orbs();
        assert_eq!(orbs[1].placement, "left: 30%; top: 60%");
        assert_eq!(orbs[4].idle.tween.duration, 7.0);
        assert_eq!(orbs[4].idle.tween.delay, 2.0);

        let lines = lines();
        assert_eq!(lines[2].placement, "left: 60%; top: 60%; width: 200px");
        assert_eq!(lines[2].idle.tween.delay, 4.0);
    }

    #[test]
    fn test_follower_tracks_pointer() {
        let follower = &pointer_effects()[0];
        let mut state = ShellState::new();
        state.pointer_moved(100.0, 40.0);
        assert_eq!(
            follower.transform(&state).css(),
            "translate(75px, 15px) scale(1) rotate(0deg)"
        );
        state.pointer_entered();
        assert_eq!(
            follower.transform(&state).css(),
            "translate(75px, 15px) scale(1.5) rotate(180deg)"
        );
        assert!(follower
            .wrapper_style(&state)
            .ends_with("transition: transform 0.371s cubic-bezier(0.22, 1, 0.36, 1)"));
    }

    #[test]
    fn test_ripples_and_trail() {
        let effects = pointer_effects();
        let mut state = ShellState::new();
        state.pointer_moved(200.0, 200.0);

        assert_eq!(effects[1].transform(&state).css(), "translate(150px, 150px)");
        assert_eq!(effects[2].transform(&state).css(), "translate(125px, 125px)");
        assert_eq!(
            effects[2].inner_style(),
            "animation: ambient-ripple-1 2s ease-out 0.5s infinite both"
        );
        // follow transitions never inherit the pulse delay
        assert_eq!(
            effects[2].follow.transition_css(),
            "transform 2s ease-out 0s"
        );

        for (i, trail) in effects[3..].iter().enumerate() {
            let shift = -15.0 + i as f64 * 5.0;
            assert_eq!(
                trail.transform(&state),
                Transform::new().translate(200.0 + shift, 200.0 + shift)
            );
        }
        let peak = |e: &PointerEffect| {
            e.pulse.as_ref().expect("trail has a pulse").keyframes.frames()[1]
                .get(Prop::Opacity)
                .expect("opacity track")
        };
        assert!((peak(&effects[3]) - 0.3).abs() < 1e-9);
        assert!((peak(&effects[4]) - 0.2).abs() < 1e-9);
        assert!((peak(&effects[5]) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_hero_entrance_is_staggered() {
        assert_eq!(
            hero_entrance_style(0),
            "animation: hero-rise 0.6s ease-out 0.3s 1 both"
        );
        assert_eq!(
            hero_entrance_style(2),
            "animation: hero-rise 0.6s ease-out 0.7s 1 both"
        );
    }

    #[test]
    fn test_stylesheet_has_every_motion_once() {
        let css = &*STYLESHEET;
        for name in [
            "ambient-circle-0",
            "ambient-circle-0-hover",
            "ambient-particle-7-hover",
            "ambient-wave-1",
            "ambient-orb-4",
            "ambient-line-2",
            "ambient-ripple-0",
            "ambient-trail-2",
            "ambient-grid",
            "hero-circle-1",
            "hero-rise",
            "hero-scroll-hint",
        ] {
            let rule = format!("@keyframes {name} {{");
            assert_eq!(css.matches(&rule).count(), 1, "{name}");
        }
    }
}
