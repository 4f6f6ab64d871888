/// Rounds to one decimal place, half away from zero. Derived hotel metrics
/// are stored at this precision.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_to_tenth(4.25), 4.3);
        assert_eq!(round_to_tenth(4.24), 4.2);
        assert_eq!(round_to_tenth(0.0), 0.0);
        assert_eq!(round_to_tenth(3.999), 4.0);
    }
}
