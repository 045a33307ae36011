//! Derived quantities computed from decoded readings.
//!
//! Pure functions of temperature and relative humidity; none of them touch
//! the device. They are conveniences for downstream consumers, not part of
//! the measurement contract.

use libm::powf;

/// Converts degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    1.8 * celsius + 32.0
}

/// Approximates the dew point in degrees Celsius from the air temperature
/// and relative humidity in percent.
pub fn dew_point(celsius: f32, relative_humidity: f32) -> f32 {
    let dryness = 1.0 - 0.01 * relative_humidity;
    celsius
        - (14.55 + 0.114 * celsius) * dryness
        - powf((2.5 + 0.007 * celsius) * dryness, 3.0)
        - (15.9 + 0.117 * celsius) * powf(dryness, 14.0)
}

/// Approximates the saturation vapor pressure of air in pascals at the
/// given temperature in degrees Celsius.
pub fn saturation_vapor_pressure(celsius: f32) -> f32 {
    610.78 * powf(2.71828, celsius / (celsius + 237.3) * 17.2694)
}

/// Vapor pressure deficit in kilopascals, from the saturation vapor
/// pressure in pascals and the relative humidity in percent.
pub fn vapor_pressure_deficit(svp_pascals: f32, relative_humidity: f32) -> f32 {
    svp_pascals * (1.0 - relative_humidity / 100.0) / 1000.0
}

/// Converts pascals to kilopascals.
pub fn pascals_to_kilopascals(pascals: f32) -> f32 {
    pascals / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        // -40 is where the two scales cross
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_dew_point_room_conditions() {
        // 20 C at 50 %RH has a dew point near 9.3 C
        let dp = dew_point(20.0, 50.0);
        assert!((dp - 9.28).abs() < 0.05, "dew point was {dp}");
    }

    #[test]
    fn test_dew_point_saturated_air_is_air_temperature() {
        // At 100 %RH every correction term vanishes
        assert!((dew_point(25.0, 100.0) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_saturation_vapor_pressure_at_20c() {
        // Reference value ~2339 Pa
        let svp = saturation_vapor_pressure(20.0);
        assert!((svp - 2338.0).abs() < 5.0, "svp was {svp}");
    }

    #[test]
    fn test_vapor_pressure_deficit() {
        let svp = saturation_vapor_pressure(20.0);
        let vpd = vapor_pressure_deficit(svp, 50.0);
        assert!((vpd - svp / 2000.0).abs() < 1e-4);
        // saturated air has no deficit
        assert_eq!(vapor_pressure_deficit(svp, 100.0), 0.0);
    }

    #[test]
    fn test_pascals_to_kilopascals() {
        assert_eq!(pascals_to_kilopascals(2338.0), 2.338);
    }
}
