pub const EARTH_RADIUS_KM: f64 = 6371.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance in kilometers using the spherical law of cosines.
///
/// For two identical points rounding can push the cosine of the central angle
/// slightly above 1.0, so it is clamped to `[-1, 1]` before `acos`.
pub fn spherical_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lat2_rad = to_radians(latitude_2);
    let dlon = to_radians(longitude_2) - to_radians(longitude_1);

    let cos_angle = lat1_rad.sin() * lat2_rad.sin()
        + lat1_rad.cos() * lat2_rad.cos() * dlon.cos();

    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}

pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        for (lat, lon) in [
            (12.3, 45.6),
            (54.3233, 10.1228),
            (-33.8688, 151.2093),
            (89.9999, -179.9999),
            (0.0, 0.0),
        ] {
            let distance = spherical_distance(lat, lon, lat, lon);
            assert!(distance.is_finite(), "NaN for ({lat}, {lon})");
            assert!(distance.abs() < 1e-3, "{distance} km for ({lat}, {lon})");
        }
    }

    #[test]
    fn quarter_meridian() {
        let distance = spherical_distance(0.0, 0.0, 90.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((distance - expected).abs() < 1e-6);
    }

    #[test]
    fn antipodes() {
        let distance = spherical_distance(0.0, 0.0, 0.0, 180.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((distance - expected).abs() < 1e-6);
    }

    #[test]
    fn agrees_with_haversine() {
        // Kiel -> Hamburg, Berlin -> Paris
        let pairs = [
            ((54.3233, 10.1228), (53.5511, 9.9937)),
            ((52.5200, 13.4050), (48.8566, 2.3522)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let cosines = spherical_distance(lat1, lon1, lat2, lon2);
            let haversine = haversine_distance(lat1, lon1, lat2, lon2);
            assert!(
                (cosines - haversine).abs() < 1e-6,
                "{cosines} vs {haversine}"
            );
        }
    }

    #[test]
    fn symmetric() {
        let a = spherical_distance(12.3, 45.6, -7.5, 110.4);
        let b = spherical_distance(-7.5, 110.4, 12.3, 45.6);
        assert!((a - b).abs() < 1e-9);
    }
}
