//! Animation collaborator.
//!
//! Entrance, hover and modal animations are delegated to an external
//! library offering declarative `from`/`to` tweens. The collaborator is
//! optional: it is chosen once at startup, and [`NoopAnimator`] stands in
//! when it is unavailable so no call site needs a presence check.
//!
//! [`Tween`] serializes to the option object the library expects:
//!
//! ```text
//! {"y":40,"opacity":0,"duration":1,"ease":"power2.out"}
//! ```

use serde::{Serialize, Serializer};

/// Selector of the hero copy block.
pub const HERO_COPY: &str = ".hero-copy";
/// Selector of the hero artwork.
pub const HERO_ART: &str = ".hero-art";
/// Selector of every card on the page.
pub const CARDS: &str = ".card";
/// Selector of the preview modal.
pub const MODAL: &str = "#project-modal";

/// Easing curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Power2Out,
    /// Overshooting ease-out with the given overshoot amount
    BackOut(f32),
}

impl Ease {
    pub fn name(&self) -> String {
        match self {
            Ease::Power2Out => "power2.out".to_string(),
            Ease::BackOut(overshoot) => format!("back.out({})", overshoot),
        }
    }
}

impl Serialize for Ease {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// Tween options; unset properties are left out of the serialized object
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tween {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Opacity that also toggles `visibility`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Seconds between successive targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
}

impl Tween {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn auto_alpha(mut self, alpha: f64) -> Self {
        self.auto_alpha = Some(alpha);
        self
    }

    pub fn box_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.box_shadow = Some(shadow.into());
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = Some(seconds);
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = Some(seconds);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    /// JSON option object for the animation library.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// External animation capability.
///
/// Both operations are fire-and-forget; implementations must not fail.
pub trait Animator {
    /// Animate `selector` from the given state to its current state.
    fn from(&self, selector: &str, tween: &Tween);

    /// Animate `target` from its current state to the given state.
    fn to(&self, target: &str, tween: &Tween);

    /// Whether this animator actually animates anything.
    fn is_active(&self) -> bool {
        true
    }
}

/// Animator used when no animation library is available
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnimator;

impl Animator for NoopAnimator {
    fn from(&self, _selector: &str, _tween: &Tween) {}

    fn to(&self, _target: &str, _tween: &Tween) {}

    fn is_active(&self) -> bool {
        false
    }
}

/// Startup animations as `(selector, from-state)` pairs.
pub fn entrance() -> Vec<(&'static str, Tween)> {
    vec![
        (
            HERO_COPY,
            Tween::new()
                .y(40.0)
                .opacity(0.0)
                .duration(1.0)
                .ease(Ease::Power2Out),
        ),
        (
            HERO_ART,
            Tween::new()
                .scale(0.8)
                .opacity(0.0)
                .duration(1.0)
                .delay(0.3)
                .ease(Ease::BackOut(1.7)),
        ),
        (
            CARDS,
            Tween::new()
                .y(30.0)
                .opacity(0.0)
                .stagger(0.15)
                .duration(0.8)
                .ease(Ease::Power2Out)
                .delay(0.5),
        ),
    ]
}

/// Card state while hovered.
pub fn hover_in() -> Tween {
    Tween::new()
        .scale(1.04)
        .box_shadow("0 18px 40px rgba(2,8,23,0.7)")
        .duration(0.3)
}

/// Card state at rest.
pub fn hover_out() -> Tween {
    Tween::new()
        .scale(1.0)
        .box_shadow("0 14px 30px rgba(2,8,23,0.6)")
        .duration(0.3)
}

/// Modal fade-in.
pub fn modal_show() -> Tween {
    Tween::new().auto_alpha(1.0).duration(0.3)
}

/// Modal fade-out.
pub fn modal_hide() -> Tween {
    Tween::new().auto_alpha(0.0).duration(0.3)
}

/// Fire the startup animations.
pub fn play_entrance(animator: &dyn Animator) {
    if !animator.is_active() {
        tracing::debug!("No animation library, skipping entrance animations");
    }
    for (selector, tween) in entrance() {
        animator.from(selector, &tween);
    }
}
