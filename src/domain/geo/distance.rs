//! Haversine great-circle distance.

/// Mean Earth radius used for all distance computations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two decimal-degree points.
///
/// Inputs are not validated; callers pass coordinates that were range-checked
/// at the boundary (see [`super::Coordinates::new`]).
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MOSCOW: (f64, f64) = (55.7558, 37.6173);
    const MAKHACHKALA: (f64, f64) = (42.9849, 47.5047);

    #[test]
    fn moscow_to_makhachkala() {
        let d = distance_km(MOSCOW.0, MOSCOW.1, MAKHACHKALA.0, MAKHACHKALA.1);
        assert!((d - 1586.7).abs() < 5.0, "got {d}");
    }

    #[test]
    fn identical_points_are_zero_apart() {
        assert_eq!(distance_km(MOSCOW.0, MOSCOW.1, MOSCOW.0, MOSCOW.1), 0.0);
    }

    #[test]
    fn antipodes_are_half_circumference_apart() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = distance_km(10.0, 20.0, 11.0, 20.0);
        assert!((d - 111.19).abs() < 0.1, "got {d}");
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let ab = distance_km(lat1, lon1, lat2, lon2);
            let ba = distance_km(lat2, lon2, lat1, lon1);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert!(distance_km(lat, lon, lat, lon).abs() < 1e-9);
        }

        #[test]
        fn distance_never_exceeds_half_circumference(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let d = distance_km(lat1, lon1, lat2, lon2);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
