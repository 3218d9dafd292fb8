use crate::error::{finite, non_negative, Error, Result};

/// Returns `count` coordinates symmetric about `center`
///
/// With an odd `count` the first coordinate is `center` followed by the pairs
/// `center ± (2k-1) spacing`, k=1..(count-1)/2.
/// With an even `count` the pairs are `center ± (2k-1) spacing/2`, k=1..count/2.
/// Within a pair the `+` coordinate comes first.
pub fn place(count: usize, spacing: f64, center: f64) -> Result<Vec<f64>> {
    if count < 1 {
        return Err(Error::InvalidConfiguration(
            "at least one coordinate is required".to_string(),
        ));
    }
    let spacing = non_negative("spacing", spacing)?;
    let center = finite("center", center)?;
    let (spacing, n_pair) = if count % 2 == 0 {
        (0.5 * spacing, count / 2)
    } else {
        (spacing, (count - 1) / 2)
    };
    let pairs = (1..=n_pair).flat_map(|k| {
        let offset = (2 * k - 1) as f64 * spacing;
        [center + offset, center - offset]
    });
    Ok(if count % 2 == 0 {
        pairs.collect()
    } else {
        std::iter::once(center).chain(pairs).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean(x: &[f64]) -> f64 {
        x.iter().sum::<f64>() / x.len() as f64
    }

    #[test]
    fn odd() {
        let xyz = place(5, 0.1, 2.).unwrap();
        assert_eq!(xyz.len(), 5);
        let expected = [2., 2.1, 1.9, 2.3, 1.7];
        xyz.iter()
            .zip(expected)
            .for_each(|(x, e)| assert!((x - e).abs() < 1e-12, "{x} vs {e}"));
    }
    #[test]
    fn even() {
        let xyz = place(4, 0.2, -1.).unwrap();
        let expected = [-0.9, -1.1, -0.7, -1.3];
        xyz.iter()
            .zip(expected)
            .for_each(|(x, e)| assert!((x - e).abs() < 1e-12, "{x} vs {e}"));
    }
    #[test]
    fn two_sources_around_screen_center() {
        let xyz = place(2, 0.8, 25.).unwrap();
        assert!((xyz[0] - 25.4).abs() < 1e-12 && (xyz[1] - 24.6).abs() < 1e-12);
    }
    #[test]
    fn single() {
        assert_eq!(place(1, 1e-30, 3.5).unwrap(), vec![3.5]);
    }
    #[test]
    fn symmetric() {
        for count in 1..=12 {
            for &(spacing, center) in &[(1e-3, 0.), (0.4, 25.), (2.5, -7.)] {
                let xyz = place(count, spacing, center).unwrap();
                assert_eq!(xyz.len(), count);
                assert!(
                    (mean(&xyz) - center).abs() < 1e-9,
                    "count {count}: mean {} != {center}",
                    mean(&xyz)
                );
            }
        }
    }
    #[test]
    fn invalid() {
        assert!(matches!(place(0, 0.1, 0.), Err(Error::InvalidConfiguration(_))));
        assert!(place(3, -0.1, 0.).is_err());
        assert!(place(3, 0.1, f64::NAN).is_err());
    }
}
