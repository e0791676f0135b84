//! Declarative motion rendered to CSS.
//!
//! Looping decorations are described as [`Keyframes`] plus a [`Tween`] and
//! emitted as `@keyframes` rules and `animation` declarations. State driven
//! motion (pointer following, hover scaling) is a target [`Transform`] plus a
//! `transition`, either tweened or derived from a [`Spring`].

/// Formats a CSS number with at most three decimals and no negative zero.
pub fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        "0".to_string()
    } else {
        format!("{r}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// An animatable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prop {
    /// Horizontal offset in px.
    X,
    /// Vertical offset in px.
    Y,
    /// Horizontal offset as a percentage of the element's own width.
    XPercent,
    /// Rotation in degrees.
    Rotate,
    Scale,
    ScaleX,
    Opacity,
    /// Both background-position axes, in percent.
    BackgroundPosition,
}

impl Prop {
    fn identity(&self) -> f64 {
        match self {
            Prop::Scale | Prop::ScaleX | Prop::Opacity => 1.0,
            _ => 0.0,
        }
    }
}

/// Keyframe values of a single property, evenly spaced over one iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub prop: Prop,
    pub values: Vec<f64>,
}

impl Track {
    pub fn new(prop: Prop, values: impl Into<Vec<f64>>) -> Self {
        Self {
            prop,
            values: values.into(),
        }
    }

    /// Value at progress `t` (0..=1), linearly interpolated between stops.
    pub fn sample(&self, t: f64) -> f64 {
        let n = self.values.len();
        match n {
            0 => self.prop.identity(),
            1 => self.values[0],
            _ => {
                let pos = t.clamp(0.0, 1.0) * (n - 1) as f64;
                let i = pos.floor() as usize;
                if i >= n - 1 {
                    return self.values[n - 1];
                }
                let frac = pos - i as f64;
                self.values[i] + (self.values[i + 1] - self.values[i]) * frac
            }
        }
    }

    fn offsets(&self) -> Vec<f64> {
        let n = self.values.len();
        if n < 2 {
            return vec![0.0, 1.0];
        }
        (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
    }
}

/// Target transform, composed in translate, scale, rotate order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transform {
    translate: Option<(f64, f64)>,
    translate_x_percent: Option<f64>,
    scale: Option<f64>,
    scale_x: Option<f64>,
    rotate: Option<f64>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.translate = Some((x, y));
        self
    }

    pub fn translate_x_percent(mut self, p: f64) -> Self {
        self.translate_x_percent = Some(p);
        self
    }

    pub fn scale(mut self, s: f64) -> Self {
        self.scale = Some(s);
        self
    }

    pub fn scale_x(mut self, s: f64) -> Self {
        self.scale_x = Some(s);
        self
    }

    pub fn rotate(mut self, deg: f64) -> Self {
        self.rotate = Some(deg);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn css(&self) -> String {
        let mut parts = Vec::new();
        if let Some((x, y)) = self.translate {
            parts.push(format!("translate({}px, {}px)", num(x), num(y)));
        }
        if let Some(p) = self.translate_x_percent {
            parts.push(format!("translateX({}%)", num(p)));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({})", num(s)));
        }
        if let Some(s) = self.scale_x {
            parts.push(format!("scaleX({})", num(s)));
        }
        if let Some(r) = self.rotate {
            parts.push(format!("rotate({}deg)", num(r)));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Resolved property values at one stop of a [`Keyframes`] timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub offset: f64,
    pub values: Vec<(Prop, f64)>,
}

impl Frame {
    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.values
            .iter()
            .find_map(|(p, v)| if *p == prop { Some(*v) } else { None })
    }

    fn declarations(&self) -> String {
        let mut transform = Transform::new();
        let x = self.get(Prop::X);
        let y = self.get(Prop::Y);
        if x.is_some() || y.is_some() {
            transform = transform.translate(x.unwrap_or(0.0), y.unwrap_or(0.0));
        }
        if let Some(p) = self.get(Prop::XPercent) {
            transform = transform.translate_x_percent(p);
        }
        if let Some(s) = self.get(Prop::Scale) {
            transform = transform.scale(s);
        }
        if let Some(s) = self.get(Prop::ScaleX) {
            transform = transform.scale_x(s);
        }
        if let Some(r) = self.get(Prop::Rotate) {
            transform = transform.rotate(r);
        }

        let mut decls = Vec::new();
        if !transform.is_empty() {
            decls.push(format!("transform: {}", transform.css()));
        }
        if let Some(o) = self.get(Prop::Opacity) {
            decls.push(format!("opacity: {}", num(o)));
        }
        if let Some(p) = self.get(Prop::BackgroundPosition) {
            decls.push(format!("background-position: {0}% {0}%", num(p)));
        }
        decls.join("; ")
    }
}

/// A looping timeline made of independent property tracks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keyframes {
    tracks: Vec<Track>,
}

impl Keyframes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(mut self, prop: Prop, values: impl Into<Vec<f64>>) -> Self {
        self.tracks.push(Track::new(prop, values));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Every stop offset used by any track, sorted and deduplicated.
    pub fn offsets(&self) -> Vec<f64> {
        let mut offsets = self
            .tracks
            .iter()
            .flat_map(|t| t.offsets())
            .collect::<Vec<_>>();
        offsets.sort_by(|a, b| a.total_cmp(b));
        offsets.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
        offsets
    }

    /// One frame per offset, with tracks that lack a stop there interpolated.
    pub fn frames(&self) -> Vec<Frame> {
        self.offsets()
            .into_iter()
            .map(|offset| Frame {
                offset,
                values: self
                    .tracks
                    .iter()
                    .map(|t| (t.prop, t.sample(offset)))
                    .collect(),
            })
            .collect()
    }

    pub fn css(&self, name: &str) -> String {
        let body = self
            .frames()
            .iter()
            .map(|f| format!("  {}% {{ {}; }}\n", num(f.offset * 100.0), f.declarations()))
            .collect::<String>();
        format!("@keyframes {name} {{\n{body}}}\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

/// Duration based timing, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Tween {
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing,
            repeat: Repeat::Once,
        }
    }

    pub fn linear(duration: f64) -> Self {
        Self::new(duration, Easing::Linear)
    }

    pub fn looping(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// `animation` shorthand; fill mode `both` keeps the first frame during the delay.
    pub fn animation_css(&self, name: &str) -> String {
        let count = match self.repeat {
            Repeat::Once => "1",
            Repeat::Forever => "infinite",
        };
        format!(
            "{name} {}s {} {}s {count} both",
            num(self.duration),
            self.easing.as_css(),
            num(self.delay)
        )
    }

    pub fn transition_css(&self, property: &str) -> String {
        format!(
            "{property} {}s {} {}s",
            num(self.duration),
            self.easing.as_css(),
            num(self.delay)
        )
    }
}

/// Damped harmonic oscillator parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// 1.0 is critically damped, below bounces, above creeps.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Exponential decay rate of the slowest mode of the response.
    pub fn decay_rate(&self) -> f64 {
        let zeta = self.damping_ratio();
        let omega = self.natural_frequency();
        if zeta < 1.0 {
            zeta * omega
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        }
    }

    /// Seconds until the displacement envelope drops under 2% of its start.
    pub fn settle_time(&self) -> f64 {
        let rate = self.decay_rate();
        if !rate.is_finite() || rate <= 0.0 {
            return 0.0;
        }
        50f64.ln() / rate
    }

    pub fn is_bouncy(&self) -> bool {
        self.damping_ratio() < 1.0
    }

    pub fn transition_css(&self, property: &str) -> String {
        let curve = if self.is_bouncy() {
            "cubic-bezier(0.34, 1.56, 0.64, 1)"
        } else {
            "cubic-bezier(0.22, 1, 0.36, 1)"
        };
        format!("{property} {}s {curve}", num(self.settle_time()))
    }
}

/// A named looping animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    pub name: String,
    pub keyframes: Keyframes,
    pub tween: Tween,
}

impl Motion {
    pub fn new(name: impl Into<String>, keyframes: Keyframes, tween: Tween) -> Self {
        Self {
            name: name.into(),
            keyframes,
            tween,
        }
    }

    pub fn keyframes_css(&self) -> String {
        self.keyframes.css(&self.name)
    }

    pub fn animation_css(&self) -> String {
        self.tween.animation_css(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(100.0), "100");
        assert_eq!(num(0.3 - 0.1), "0.2");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(1.23456), "1.235");
        assert_eq!(num(-50.0), "-50");
    }

    #[test]
    fn test_track_sampling() {
        let t = Track::new(Prop::X, [0.0, 100.0, 0.0]);
        assert_eq!(t.sample(0.0), 0.0);
        assert_eq!(t.sample(0.25), 50.0);
        assert_eq!(t.sample(0.5), 100.0);
        assert_eq!(t.sample(1.0), 0.0);
        assert_eq!(t.sample(2.0), 0.0);

        let single = Track::new(Prop::Opacity, [0.4]);
        assert_eq!(single.sample(0.7), 0.4);

        let empty = Track::new(Prop::Scale, Vec::new());
        assert_eq!(empty.sample(0.5), 1.0);
    }

    #[test]
    fn test_offsets_merge_tracks_of_different_lengths() {
        let kf = Keyframes::new()
            .track(Prop::Rotate, [0.0, 360.0])
            .track(Prop::Scale, [1.0, 1.2, 1.0]);
        assert_eq!(kf.offsets(), vec![0.0, 0.5, 1.0]);

        let frames = kf.frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].get(Prop::Rotate), Some(180.0));
        assert_eq!(frames[1].get(Prop::Scale), Some(1.2));
        assert_eq!(frames[2].get(Prop::Rotate), Some(360.0));
    }

    #[test]
    fn test_keyframes_css() {
        let kf = Keyframes::new()
            .track(Prop::X, [0.0, 100.0, 0.0])
            .track(Prop::Y, [0.0, -50.0, 0.0])
            .track(Prop::Rotate, [0.0, 180.0, 360.0])
            .track(Prop::Opacity, [0.0, 1.0, 0.0]);
        let css = kf.css("float");
        assert!(css.starts_with("@keyframes float {\n"));
        assert!(css.contains(
            "  50% { transform: translate(100px, -50px) rotate(180deg); opacity: 1; }\n"
        ));
        assert!(css.contains("  0% { transform: translate(0px, 0px) rotate(0deg); opacity: 0; }\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn test_background_position_css() {
        let css = Keyframes::new()
            .track(Prop::BackgroundPosition, [0.0, 100.0])
            .css("grid");
        assert!(css.contains("  0% { background-position: 0% 0%; }"));
        assert!(css.contains("  100% { background-position: 100% 100%; }"));
    }

    #[test]
    fn test_transform_order() {
        let t = Transform::new()
            .rotate(180.0)
            .scale(1.5)
            .translate(75.0, 25.0);
        assert_eq!(t.css(), "translate(75px, 25px) scale(1.5) rotate(180deg)");
        assert_eq!(Transform::new().css(), "none");
    }

    #[test]
    fn test_tween_css() {
        let tween = Tween::new(2.0, Easing::EaseOut).looping().with_delay(0.5);
        assert_eq!(
            tween.animation_css("ripple"),
            "ripple 2s ease-out 0.5s infinite both"
        );
        assert_eq!(
            Tween::new(0.8, Easing::EaseInOut).transition_css("opacity"),
            "opacity 0.8s ease-in-out 0s"
        );
        assert_eq!(Tween::linear(1.0).animation_css("x"), "x 1s linear 0s 1 both");
    }

    #[test]
    fn test_overdamped_spring() {
        let spring = Spring::new(200.0, 20.0, 0.1);
        assert!(spring.damping_ratio() > 2.2 && spring.damping_ratio() < 2.25);
        assert!(!spring.is_bouncy());
        let settle = spring.settle_time();
        assert!(settle > 0.36 && settle < 0.38, "settle time was {settle}");
        assert_eq!(
            spring.transition_css("transform"),
            "transform 0.371s cubic-bezier(0.22, 1, 0.36, 1)"
        );
    }

    #[test]
    fn test_underdamped_spring() {
        let spring = Spring::new(400.0, 10.0, 1.0);
        assert!(spring.is_bouncy());
        assert_eq!(spring.decay_rate(), 5.0);
        assert!(spring.transition_css("transform").contains("1.56"));
    }

    #[test]
    fn test_degenerate_spring_settles_immediately() {
        assert_eq!(Spring::new(0.0, 0.0, 1.0).settle_time(), 0.0);
    }

    #[test]
    fn test_motion_css() {
        let motion = Motion::new(
            "bounce",
            Keyframes::new().track(Prop::Y, [0.0, 10.0, 0.0]),
            Tween::new(2.0, Easing::EaseInOut).looping(),
        );
        assert!(motion.keyframes_css().starts_with("@keyframes bounce"));
        assert_eq!(motion.animation_css(), "bounce 2s ease-in-out 0s infinite both");
    }
}
