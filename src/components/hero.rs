//! Hero Section Component
//!
//! Introduction copy with the typewriter tagline, and the tilting device
//! card artwork.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::tilt::{Rect, TiltTracker, REST_TRANSFORM};
use folio_core::typewriter::{self, Typewriter, TypewriterHandle};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero-copy",
                p { class: "eyebrow", "Designer & front-end developer" }
                h1 { class: "hero-title", "I build calm, fast interfaces." }
                TypedTagline {}
                div { class: "hero-cta",
                    a { class: "btn btn-primary", href: "#projects", "See projects" }
                    a { class: "btn btn-ghost", href: "#contact", "Get in touch" }
                }
            }
            div { class: "hero-art",
                DeviceCard {}
            }
        }
    }
}

/// Tagline revealed one character at a time.
///
/// The loop starts on mount and is stopped when the component is dropped.
#[component]
fn TypedTagline() -> Element {
    let mut typed = use_signal(String::new);
    let handle = use_hook(TypewriterHandle::new);

    use_hook({
        let token = handle.token();
        move || {
            spawn(typewriter::run(Typewriter::default(), token, move |text| {
                typed.set(text)
            }))
        }
    });

    use_drop({
        let handle = handle.clone();
        move || handle.stop()
    });

    rsx! {
        p { class: "hero-meta",
            span { id: "typed", "{typed}" }
            span { class: "caret", "aria-hidden": "true", "|" }
        }
    }
}

/// Device mockup that tilts toward the pointer.
///
/// The bounding box is measured once per hover; moves then update the
/// transform synchronously, and leaving always restores the rest pose.
#[component]
fn DeviceCard() -> Element {
    let mut element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut tracker = use_signal(TiltTracker::new);
    let mut transform = use_signal(|| REST_TRANSFORM.to_string());

    let measure = move |generation: u64| {
        spawn(async move {
            let Some(el) = element() else { return };
            let Ok(rect) = el.get_client_rect().await else { return };
            let rect = Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
            if !tracker.write().measured(generation, rect) {
                tracing::trace!(generation, "Discarding stale card measurement");
            }
        });
    };

    let on_enter = move |_: MouseEvent| {
        let generation = tracker.write().enter();
        measure(generation);
    };

    let on_move = move |evt: MouseEvent| {
        if !tracker.read().is_hovering() {
            let generation = tracker.write().enter();
            measure(generation);
            return;
        }
        let point = evt.client_coordinates();
        if let Some(next) = tracker.read().pointer_move(point.x, point.y) {
            transform.set(next);
        }
    };

    let on_leave = move |_: MouseEvent| {
        let rest = tracker.write().leave();
        transform.set(rest.to_string());
    };

    rsx! {
        div {
            id: "device-card",
            class: "device-card",
            style: "transform: {transform}",
            onmounted: move |evt: MountedEvent| element.set(Some(evt.data())),
            onmouseenter: on_enter,
            onmousemove: on_move,
            onmouseleave: on_leave,

            div { class: "device-screen",
                div { class: "device-bar" }
                div { class: "device-line wide" }
                div { class: "device-line" }
                div { class: "device-line short" }
            }
        }
    }
}
