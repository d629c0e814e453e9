//! GSAP-backed animation collaborator.
//!
//! Tweens are forwarded to the page's `gsap` global through script
//! evaluation. The library is loaded from a CDN, so its presence is only
//! known after the page has mounted; [`detect`] waits briefly for it and
//! falls back to the no-op animator.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Animator, Tween};

use crate::context::SharedAnimator;

/// Script source for the animation library.
pub const GSAP_SRC: &str = "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.5/gsap.min.js";

const DETECT_SCRIPT: &str = r#"
return await new Promise((resolve) => {
    if (window.gsap) { resolve(true); return; }
    let tries = 0;
    const timer = setInterval(() => {
        tries += 1;
        if (window.gsap || tries > 20) {
            clearInterval(timer);
            resolve(!!window.gsap);
        }
    }, 100);
});
"#;

/// Animator that drives `gsap.from` / `gsap.to` in the page
#[derive(Debug, Clone, Copy, Default)]
pub struct GsapAnimator;

impl GsapAnimator {
    fn call(method: &str, target: &str, tween: &Tween) {
        let target = serde_json::to_string(target).unwrap_or_else(|_| "\"\"".to_string());
        let script = format!("window.gsap && gsap.{}({}, {});", method, target, tween.to_json());
        let _ = document::eval(&script);
    }
}

impl Animator for GsapAnimator {
    fn from(&self, selector: &str, tween: &Tween) {
        Self::call("from", selector, tween);
    }

    fn to(&self, target: &str, tween: &Tween) {
        Self::call("to", target, tween);
    }
}

/// Pick the animator for this page.
pub async fn detect(disabled: bool) -> SharedAnimator {
    if disabled {
        tracing::info!("Animations disabled by flag");
        return SharedAnimator::default();
    }

    match document::eval(DETECT_SCRIPT).join::<bool>().await {
        Ok(true) => {
            tracing::info!("Animation library detected");
            SharedAnimator(Rc::new(GsapAnimator))
        }
        Ok(false) => {
            tracing::warn!("Animation library not available, animations disabled");
            SharedAnimator::default()
        }
        Err(e) => {
            tracing::warn!("Animation library detection failed: {:?}", e);
            SharedAnimator::default()
        }
    }
}
