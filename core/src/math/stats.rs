pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(samples: &[f32]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f32>() / samples.len() as f32
    }

    pub fn std_dev(samples: &[f32]) -> f32 {
        if samples.len() < 2 {
            return 0.0;
        }
        let mean = Self::mean(samples);
        let variance = samples.iter().map(|&v| (v - mean) * (v - mean)).sum::<f32>()
            / samples.len() as f32;
        variance.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_sequence_is_zero() {
        assert_eq!(StatsHelper::mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_known_values() {
        assert_eq!(StatsHelper::mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn std_dev_handles_degenerate_lengths() {
        assert_eq!(StatsHelper::std_dev(&[]), 0.0);
        assert_eq!(StatsHelper::std_dev(&[4.0]), 0.0);
    }

    #[test]
    fn std_dev_of_known_values() {
        assert_eq!(StatsHelper::std_dev(&[2.0, 2.0, 2.0]), 0.0);
        assert!((StatsHelper::std_dev(&[1.0, 3.0]) - 1.0).abs() < 1e-6);
    }
}
