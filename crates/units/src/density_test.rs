mod tests {
    use approx::assert_relative_eq;

    use crate::density::Density;

    #[test]
    fn test_density_conversions() {
        let water = Density::from_grams_per_cm3(1.0);
        assert_relative_eq!(water.to_kg_per_m3(), 1000.0);

        let dense = Density::from_kg_per_m3(1.0e9);
        assert_relative_eq!(dense.to_grams_per_cm3(), 1.0e6);
    }
}
