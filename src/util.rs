use itertools::Itertools;

pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

pub fn std_dev(data: &[f64]) -> Option<f64> {
    let data_mean = mean(data)?;
    let variance = data
        .iter()
        .map(|value| {
            let diff = data_mean - *value;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64;
    Some(variance.sqrt())
}

/// Smallest and largest value in one pass. None on an empty slice.
pub fn spread(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .minmax_by(|a, b| a.partial_cmp(b).expect("reaction times are finite"))
        .into_option()
}
