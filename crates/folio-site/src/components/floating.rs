//! Floating background shapes.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::motion::{float_offset, float_rotation};

/// Frame interval for the float loop.
const FRAME: Duration = Duration::from_millis(50);

/// (left %, top %, size px, phase, shape class)
const SHAPES: [(f64, f64, u32, f64, &str); 6] = [
    (8.0, 18.0, 64, 0.0, "shape-ring"),
    (82.0, 12.0, 42, 1.1, "shape-square"),
    (70.0, 70.0, 90, 2.3, "shape-blob"),
    (15.0, 75.0, 36, 3.7, "shape-triangle"),
    (45.0, 8.0, 24, 4.4, "shape-dot"),
    (92.0, 45.0, 54, 5.2, "shape-ring"),
];

/// Slowly bobbing decorative shapes behind the hero.
///
/// The loop belongs to this component and stops when it unmounts.
#[component]
pub fn FloatingShapes() -> Element {
    let mut elapsed = use_signal(|| 0.0_f64);

    use_future(move || async move {
        loop {
            tokio::time::sleep(FRAME).await;
            elapsed += FRAME.as_secs_f64();
        }
    });

    let t = elapsed();

    rsx! {
        div {
            class: "floating-shapes",
            "aria-hidden": "true",
            for (i, (left, top, size, phase, shape)) in SHAPES.iter().enumerate() {
                {
                    let dy = float_offset(t, *phase, 14.0);
                    let spin = float_rotation(t, *phase);
                    let style = format!(
                        "left: {left}%; top: {top}%; width: {size}px; height: {size}px; \
                         transform: translateY({dy:.1}px) rotate({spin:.1}deg);"
                    );
                    rsx! {
                        div {
                            key: "{i}",
                            class: "floating-shape {shape}",
                            style: "{style}",
                        }
                    }
                }
            }
        }
    }
}
