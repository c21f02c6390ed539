//! Live visitors globe.

use std::time::Duration;

use chrono::Utc;
use dioxus::prelude::*;
use folio_core::globe::{self, GLOBE_TILT_DEG};
use folio_core::motion::advance_angle;
use folio_core::tasks::ScopedTask;
use folio_core::visitors::VisitorFeed;

use crate::script;
use crate::services::Services;

const VIEW_SIZE: f64 = 240.0;
const SPIN_DEG_PER_SEC: f64 = 6.0;
const FRAME: Duration = Duration::from_millis(40);
const RECENT_SHOWN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlobeMode {
    Probing,
    Svg,
    Static,
}

/// A visitor marker already placed in view coordinates.
#[derive(Debug, Clone, PartialEq)]
struct Marker {
    id: u64,
    cx: String,
    cy: String,
    is_current: bool,
}

/// A row in the recent visitors list.
#[derive(Debug, Clone, PartialEq)]
struct RecentRow {
    id: u64,
    place: String,
    ago: String,
    is_current: bool,
}

fn ago_label(seconds: i64) -> String {
    match seconds {
        s if s < 5 => "just now".to_string(),
        s if s < 60 => format!("{s}s ago"),
        s => format!("{}m ago", s / 60),
    }
}

/// Rotating globe plotting the visitor feed.
///
/// The feed is seeded from one geolocation lookup and then topped up on a
/// timer. Without SVG support the globe is replaced by the plain list.
#[component]
pub fn VisitorGlobe() -> Element {
    let services = use_context::<Services>();
    let mut mode = use_signal(|| GlobeMode::Probing);
    let mut center_lon = use_signal(|| 0.0_f64);
    let mut feed = {
        let cap = services.config.visitors.max_visitors;
        use_signal(move || VisitorFeed::new(cap))
    };

    // Seed, then spawn synthetic visitors until unmounted.
    use_future(move || {
        let services = services.clone();
        async move {
            let supported = script::probe(script::PROBE_SVG_JS).await;
            mode.set(if supported { GlobeMode::Svg } else { GlobeMode::Static });

            let lookup = services.locator.locate().await;
            feed.write().seed(lookup, &mut rand::rng());

            // Signals stay on the UI thread; the timer only signals ticks.
            let (tx, mut rx) = tokio::sync::mpsc::channel::<()>(4);
            let _spawner = ScopedTask::interval(
                "visitor-spawner",
                services.config.visitors.spawn_interval(),
                move || {
                    let _ = tx.try_send(());
                },
            );
            while rx.recv().await.is_some() {
                feed.write().spawn_synthetic(&mut rand::rng());
            }
        }
    });

    use_future(move || async move {
        loop {
            tokio::time::sleep(FRAME).await;
            if *mode.peek() != GlobeMode::Svg {
                continue;
            }
            let next = advance_angle(*center_lon.peek(), SPIN_DEG_PER_SEC, FRAME);
            center_lon.set(next);
        }
    });

    let center = center_lon();
    let now = Utc::now();
    let f = feed.read();
    let visitor_count = f.len();
    let country_count = f.country_count();
    let live = f.is_live();
    let markers: Vec<Marker> = f
        .visitors()
        .filter_map(|v| {
            let point = globe::project(v.latitude, v.longitude, center)?;
            let (x, y) = globe::to_view(point, VIEW_SIZE);
            Some(Marker {
                id: v.id,
                cx: format!("{x:.1}"),
                cy: format!("{y:.1}"),
                is_current: v.is_current,
            })
        })
        .collect();
    let recent: Vec<RecentRow> = f
        .visitors()
        .rev()
        .take(RECENT_SHOWN)
        .map(|v| RecentRow {
            id: v.id,
            place: format!("{}, {}", v.city, v.country),
            ago: ago_label((now - v.timestamp).num_seconds()),
            is_current: v.is_current,
        })
        .collect();
    drop(f);

    let graticule = if mode() == GlobeMode::Svg {
        globe::graticule_paths(center, 30, VIEW_SIZE)
    } else {
        Vec::new()
    };
    let radius = VIEW_SIZE / 2.0 - 1.0;
    let mid = VIEW_SIZE / 2.0;

    rsx! {
        div {
            class: "visitor-globe",

            div {
                class: "globe-header",
                span { class: if live { "live-dot live-dot-on" } else { "live-dot" } }
                span { class: "globe-title", "Live Visitors" }
                span { class: "globe-count", "{visitor_count} visitors · {country_count} countries" }
            }

            match mode() {
                GlobeMode::Probing => rsx! {
                    div { class: "globe-placeholder", "Loading globe..." }
                },
                GlobeMode::Static => rsx! {
                    div { class: "globe-placeholder globe-static", "🌍" }
                },
                GlobeMode::Svg => rsx! {
                    svg {
                        class: "globe-svg",
                        "viewBox": "0 0 {VIEW_SIZE} {VIEW_SIZE}",
                        width: "{VIEW_SIZE}",
                        height: "{VIEW_SIZE}",
                        "data-tilt": "{GLOBE_TILT_DEG}",

                        circle { class: "globe-sphere", cx: "{mid}", cy: "{mid}", r: "{radius}" }
                        for (i, d) in graticule.iter().enumerate() {
                            path { key: "{i}", class: "globe-graticule", d: "{d}" }
                        }
                        for marker in markers.iter() {
                            circle {
                                key: "{marker.id}",
                                class: if marker.is_current { "globe-marker globe-marker-current" } else { "globe-marker" },
                                cx: "{marker.cx}",
                                cy: "{marker.cy}",
                                r: if marker.is_current { "5" } else { "3.5" },
                            }
                        }
                    }
                },
            }

            ul {
                class: "visitor-list",
                for row in recent.iter() {
                    li {
                        key: "{row.id}",
                        class: if row.is_current { "visitor-row visitor-row-current" } else { "visitor-row" },
                        span { class: "visitor-place", "{row.place}" }
                        if row.is_current {
                            span { class: "visitor-you", "you" }
                        }
                        span { class: "visitor-ago", "{row.ago}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ago_label() {
        assert_eq!(ago_label(0), "just now");
        assert_eq!(ago_label(42), "42s ago");
        assert_eq!(ago_label(185), "3m ago");
    }
}
