//! Orthographic globe projection for the visitor widget.
//!
//! Output coordinates are unit-disc coordinates with `y` pointing down, so
//! the renderer only has to scale and translate into its viewBox.

/// Tilt of the globe toward the viewer, in degrees.
pub const GLOBE_TILT_DEG: f64 = 18.0;

/// Projects `(lat, lon)` with `center_lon` facing the viewer.
///
/// Returns `None` for points on the far hemisphere.
pub fn project(lat: f64, lon: f64, center_lon: f64) -> Option<(f64, f64)> {
    let phi = lat.to_radians();
    let lambda = (lon - center_lon).to_radians();
    let phi0 = GLOBE_TILT_DEG.to_radians();

    let cos_c = phi0.sin() * phi.sin() + phi0.cos() * phi.cos() * lambda.cos();
    if cos_c < 0.0 {
        return None;
    }

    let x = phi.cos() * lambda.sin();
    let y = phi0.cos() * phi.sin() - phi0.sin() * phi.cos() * lambda.cos();
    Some((x, -y))
}

/// Scales a unit-disc point into a square viewBox of `size`.
pub fn to_view(point: (f64, f64), size: f64) -> (f64, f64) {
    let r = size / 2.0;
    (r + point.0 * r, r + point.1 * r)
}

/// Builds SVG path data for the visible parts of meridians and parallels.
pub fn graticule_paths(center_lon: f64, step_deg: u32, size: f64) -> Vec<String> {
    let step = step_deg.max(5) as i32;
    let mut paths = Vec::new();

    // Meridians
    let mut lon = -180;
    while lon < 180 {
        let points = (-90..=90).step_by(3).map(|lat| (lat as f64, lon as f64));
        paths.extend(visible_runs(points, center_lon, size));
        lon += step;
    }

    // Parallels
    let mut lat = -90 + step;
    while lat < 90 {
        let points = (-180..=180).step_by(3).map(|lon| (lat as f64, lon as f64));
        paths.extend(visible_runs(points, center_lon, size));
        lat += step;
    }

    paths
}

/// Splits a polyline into path strings covering its visible runs.
fn visible_runs(
    points: impl Iterator<Item = (f64, f64)>,
    center_lon: f64,
    size: f64,
) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();

    for (lat, lon) in points {
        match project(lat, lon, center_lon) {
            Some(p) => {
                let (x, y) = to_view(p, size);
                let cmd = if current.is_empty() { 'M' } else { 'L' };
                current.push_str(&format!("{cmd}{x:.1},{y:.1} "));
            }
            None => {
                if current.contains('L') {
                    runs.push(current.trim_end().to_string());
                }
                current.clear();
            }
        }
    }
    if current.contains('L') {
        runs.push(current.trim_end().to_string());
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_point_projects_near_middle() {
        let (x, y) = project(0.0, 0.0, 0.0).unwrap();
        assert!(x.abs() < 1e-9);
        // Equator sits below center because of the tilt
        assert!(y > 0.0 && y < 1.0);
    }

    #[test]
    fn test_far_side_hidden() {
        assert!(project(0.0, 180.0, 0.0).is_none());
        assert!(project(0.0, 0.0, 180.0).is_none());
        assert!(project(0.0, 100.0, 100.0).is_some());
    }

    #[test]
    fn test_projection_within_disc() {
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(15) {
                if let Some((x, y)) = project(lat as f64, lon as f64, 40.0) {
                    assert!(x * x + y * y <= 1.0 + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_graticule_has_visible_lines() {
        let paths = graticule_paths(0.0, 30, 200.0);
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.starts_with('M')));
    }

    #[test]
    fn test_to_view_scales() {
        assert_eq!(to_view((0.0, 0.0), 200.0), (100.0, 100.0));
        assert_eq!(to_view((1.0, -1.0), 200.0), (200.0, 0.0));
    }
}
