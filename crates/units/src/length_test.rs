mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, EARTH_RADIUS_M, LUNAR_DISTANCE_M};

    #[test]
    fn test_length_conversions() {
        let orbit = Length::from_lunar_distances(1.0);
        assert_relative_eq!(orbit.to_m(), LUNAR_DISTANCE_M);
        assert_relative_eq!(orbit.to_km(), 384_400.0);

        let radius = Length::from_km(6_371.0);
        assert_relative_eq!(radius.to_earth_radii(), 1.0);
        assert_relative_eq!(Length::from_earth_radii(2.0).to_m(), 2.0 * EARTH_RADIUS_M);

        let original = 5.7;
        let round_trip = Length::from_cm(Length::from_meters(original).to_cm()).to_m();
        assert_relative_eq!(round_trip, original);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let length1 = Length::from_meters(5.0);
        let length2 = Length::from_meters(3.0);

        assert_relative_eq!((length1 + length2).to_m(), 8.0);
        assert_relative_eq!((length1 - length2).to_m(), 2.0);
        assert_relative_eq!((length1 * 2.0).to_m(), 10.0);
        assert_relative_eq!((2.0 * length1).to_m(), 10.0);
        assert_relative_eq!((length1 / 5.0).to_m(), 1.0);
        assert_relative_eq!(length1 / length2, 5.0 / 3.0);

        assert_eq!(length1.min(length2), length2);
        assert_eq!(length1.max(length2), length1);
        assert_relative_eq!(length2.powi(2), 9.0);
    }
}
