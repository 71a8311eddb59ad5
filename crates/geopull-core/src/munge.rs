//! Post-fetch geometry utilities for snapped-coordinate analysis.
//!
//! Network snapping (e.g. routing engines moving a centroid onto the nearest
//! road) revises coordinates; these helpers measure the revision by drawing a
//! connector line between the original and snapped points and computing the
//! great-circle distance between them.

use geo_types::{Line, Point};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

/// Great-circle distance in metres between two lon/lat points.
///
/// Points carry longitude in `x` and latitude in `y`, matching the `GeoJSON`
/// axis order used throughout this crate.
#[must_use]
pub fn haversine_metres(a: Point<f64>, b: Point<f64>) -> f64 {
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.y().to_radians().cos() * b.y().to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_METRES * c
}

/// How far a snapped point moved from its original position.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapDeviation {
    /// Line from the original point to the snapped point
    pub connector: Line<f64>,
    /// Great-circle length of the connector in metres
    pub metres: f64,
}

/// Measure the deviation between an original point and its snapped revision.
///
/// # Examples
///
/// ```
/// use geo_types::Point;
/// use geopull_core::munge::snap_deviation;
///
/// let original = Point::new(-0.018, 51.583);
/// let snapped = Point::new(-0.019, 51.583);
/// let deviation = snap_deviation(original, snapped);
/// assert!(deviation.metres > 0.0);
/// assert!(deviation.metres < 100.0);
/// ```
#[must_use]
pub fn snap_deviation(original: Point<f64>, snapped: Point<f64>) -> SnapDeviation {
    SnapDeviation {
        connector: Line::new(original, snapped),
        metres: haversine_metres(original, snapped),
    }
}

/// Measure deviations for a batch of (original, snapped) point pairs.
///
/// Output order matches input order.
#[must_use]
pub fn snap_deviations(
    pairs: impl IntoIterator<Item = (Point<f64>, Point<f64>)>,
) -> Vec<SnapDeviation> {
    pairs
        .into_iter()
        .map(|(original, snapped)| snap_deviation(original, snapped))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_identical_points() {
        let p = Point::new(-0.018, 51.583);
        assert_eq!(haversine_metres(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = haversine_metres(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert!((d - 111_195.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = haversine_metres(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = haversine_metres(Point::new(0.0, 0.0), Point::new(180.0, 0.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_METRES;
        assert!((d - half).abs() < 1.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(-0.1278, 51.5074);
        let b = Point::new(2.3522, 48.8566);
        let forward = haversine_metres(a, b);
        let back = haversine_metres(b, a);
        assert!((forward - back).abs() < 1e-6, "{forward} vs {back}");
    }

    #[test]
    fn connector_runs_from_original_to_snapped() {
        let original = Point::new(-0.018, 51.583);
        let snapped = Point::new(-0.020, 51.584);
        let deviation = snap_deviation(original, snapped);
        assert_eq!(deviation.connector.start, original.into());
        assert_eq!(deviation.connector.end, snapped.into());
    }

    #[test]
    fn batch_preserves_input_order() {
        let pairs = vec![
            (Point::new(0.0, 0.0), Point::new(0.0, 0.1)),
            (Point::new(1.0, 1.0), Point::new(1.0, 1.0)),
        ];
        let deviations = snap_deviations(pairs);
        assert_eq!(deviations.len(), 2);
        assert!(deviations[0].metres > 0.0);
        assert_eq!(deviations[1].metres, 0.0);
    }
}
