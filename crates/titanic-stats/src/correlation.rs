//! Pearson correlation.
//!
//! Missing observations are handled pairwise: for each pair of columns only
//! the rows where both values are present contribute to the coefficient.

/// Computes the Pearson correlation coefficient over `(x, y)` pairs.
///
/// Returns `None` when fewer than two pairs are given or when either side
/// has zero variance. The result is clamped to `[-1, 1]`.
///
/// ```
/// # use titanic_stats::correlation::pearson;
/// let r = pearson([(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)]).unwrap();
/// assert!((r + 1.0).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let pairs = pairs.into_iter().collect::<Vec<_>>();
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (cov, var_x, var_y) = pairs.iter().fold((0.0, 0.0, 0.0), |(c, vx, vy), (x, y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (c + dx * dy, vx + dx * dx, vy + dy * dy)
    });
    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }
    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

/// Computes the Pearson correlation using only rows where both values are present.
///
/// # Panics
///
/// Panics if the two columns have different lengths.
#[must_use]
pub fn pearson_pairwise(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    assert_eq!(xs.len(), ys.len(), "columns must have the same length");
    pearson(
        xs.iter()
            .zip(ys)
            .filter_map(|(x, y)| Some(((*x)?, (*y)?))),
    )
}

/// Computes the symmetric pairwise-complete correlation matrix of the given columns.
///
/// Entry `[i][j]` is the coefficient between column `i` and column `j`.
/// The diagonal is exactly `1.0` for any column with non-zero variance.
///
/// ```
/// # use titanic_stats::correlation::correlation_matrix;
/// let a = vec![Some(1.0), Some(2.0), Some(3.0)];
/// let b = vec![Some(2.0), Some(4.0), Some(7.0)];
/// let m = correlation_matrix(&[a, b]);
/// assert_eq!(m[0][0], Some(1.0));
/// assert_eq!(m[0][1], m[1][0]);
/// ```
#[must_use]
pub fn correlation_matrix(columns: &[Vec<Option<f64>>]) -> Vec<Vec<Option<f64>>> {
    let n = columns.len();
    let mut matrix = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson_pairwise(&columns[i], &columns[j]);
            let r = if i == j { r.map(|_| 1.0) } else { r };
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
}
