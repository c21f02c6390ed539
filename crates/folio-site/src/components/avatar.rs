//! Rotating 3D avatar card.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::content::PROFILE;
use folio_core::motion::{advance_angle, blended_speed, step_blend};

use crate::script;

const FRAME: Duration = Duration::from_millis(33);
const SPIN_DEG_PER_SEC: f64 = 24.0;
const HOVER_SLOWDOWN: f64 = 0.25;
const HOVER_EASE: Duration = Duration::from_millis(400);

/// Rendering path chosen after the capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AvatarMode {
    Probing,
    Scene,
    Flat,
}

/// Layered avatar card spun with CSS 3D transforms.
///
/// Falls back to a flat portrait when 3D transforms are unsupported or the
/// user prefers reduced motion. The spin loop only runs in scene mode and
/// ends with the component.
#[component]
pub fn Avatar3D() -> Element {
    let mut mode = use_signal(|| AvatarMode::Probing);
    let mut angle = use_signal(|| 0.0_f64);
    let mut hovered = use_signal(|| false);

    use_future(move || async move {
        let supported = script::probe(script::PROBE_3D_JS).await;
        tracing::debug!(supported, "Avatar 3D probe");
        if !supported {
            mode.set(AvatarMode::Flat);
            return;
        }
        mode.set(AvatarMode::Scene);

        let mut blend = 0.0;
        loop {
            tokio::time::sleep(FRAME).await;
            let target = if *hovered.peek() { 1.0 } else { 0.0 };
            blend = step_blend(blend, target, FRAME, HOVER_EASE);
            let speed = blended_speed(SPIN_DEG_PER_SEC, HOVER_SLOWDOWN, blend);
            let next = advance_angle(*angle.peek(), speed, FRAME);
            angle.set(next);
        }
    });

    match mode() {
        AvatarMode::Probing | AvatarMode::Flat => rsx! {
            div {
                class: "avatar-flat",
                img { class: "avatar-image", src: "{PROFILE.avatar}", alt: "{PROFILE.name}" }
            }
        },
        AvatarMode::Scene => {
            let a = angle();
            let tilt = (a.to_radians().sin() * 10.0).round();
            let transform = format!("transform: rotateY({a:.1}deg) rotateX({tilt}deg);");
            rsx! {
                div {
                    class: "avatar-scene",
                    onmouseenter: move |_| hovered.set(true),
                    onmouseleave: move |_| hovered.set(false),
                    div {
                        class: "avatar-card",
                        style: "{transform}",
                        div { class: "avatar-layer avatar-ring avatar-ring-outer" }
                        div { class: "avatar-layer avatar-ring avatar-ring-inner" }
                        img {
                            class: "avatar-layer avatar-image",
                            src: "{PROFILE.avatar}",
                            alt: "{PROFILE.name}",
                        }
                        div { class: "avatar-layer avatar-badge", "</>" }
                    }
                    div { class: "avatar-shadow" }
                }
            }
        }
    }
}
