mod tests {
    use approx::assert_relative_eq;

    use crate::time::{Time, MS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR};

    #[test]
    fn test_time_conversions() {
        let tick = Time::from_milliseconds(20.0);
        assert_relative_eq!(tick.to_seconds(), 20.0 / MS_PER_SECOND);
        assert_relative_eq!(tick.to_milliseconds(), 20.0);

        let day = Time::from_days(1.0);
        assert_relative_eq!(day.to_seconds(), SECONDS_PER_DAY);
        assert_relative_eq!(day.to_hours(), 24.0);

        let hours = Time::from_hours(240.0);
        assert_relative_eq!(hours.to_seconds(), 240.0 * SECONDS_PER_HOUR);
        assert_relative_eq!(hours.to_days(), 10.0);

        let sum = Time::from_days(10.0) + Time::from_days(5.0);
        assert_relative_eq!(sum.to_days(), 15.0);
    }

    #[test]
    fn test_time_scaling() {
        // A sub-step scaled by a time multiplier
        let dt = Time::from_milliseconds(20.0) * 10.0;
        assert_relative_eq!(dt.to_seconds(), 0.2);
        assert_relative_eq!((2.0 * dt).to_seconds(), 0.4);
        assert_relative_eq!((dt / 2.0).to_seconds(), 0.1);
        assert_relative_eq!(dt / Time::from_seconds(0.1), 2.0);
        assert_relative_eq!((dt - Time::from_seconds(0.05)).to_seconds(), 0.15);
        assert_eq!(Time::zero().to_seconds(), 0.0);
    }
}
