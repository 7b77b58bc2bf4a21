//! Binary logistic regression with L2 regularisation.
//!
//! The model minimises
//!
//! ```text
//! ½‖w‖² + C · Σᵢ [ log(1 + exp(zᵢ)) − yᵢ·zᵢ ],   zᵢ = w·xᵢ + b
//! ```
//!
//! with Newton's method and a backtracking line search. The intercept `b` is
//! not penalised. The problem is strictly convex in `w`, so the fit is
//! deterministic: the same data always produce the same coefficients.

/// Solver settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Inverse regularisation strength; smaller values mean stronger regularisation.
    pub c: f64,
    /// Convergence threshold on the largest gradient component, per sample.
    pub tol: f64,
    /// Maximum number of Newton iterations.
    pub max_iter: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            c: 1.0,
            tol: 1e-4,
            max_iter: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum FitError {
    #[display("no training rows")]
    Empty,
    #[display("training labels contain a single class")]
    SingleClass,
    #[display("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[display("Hessian is singular")]
    Singular,
}

/// A fitted binary classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    iterations: usize,
    converged: bool,
}

impl LogisticRegression {
    /// Fits the model to feature rows `x` and labels `y`.
    ///
    /// Running out of iterations is not an error: the current estimate is
    /// returned and [`converged`](Self::converged) reports `false`.
    pub fn fit(x: &[Vec<f64>], y: &[bool], options: &FitOptions) -> Result<Self, FitError> {
        let Some(first) = x.first() else {
            return Err(FitError::Empty);
        };
        if y.len() != x.len() {
            return Err(FitError::DimensionMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }
        let features = first.len();
        if let Some(row) = x.iter().find(|row| row.len() != features) {
            return Err(FitError::DimensionMismatch {
                expected: features,
                actual: row.len(),
            });
        }
        if y.iter().all(|&v| v) || y.iter().all(|&v| !v) {
            return Err(FitError::SingleClass);
        }

        let problem = Problem { x, y, c: options.c };
        #[expect(clippy::cast_precision_loss)]
        let threshold = options.tol * x.len() as f64;

        // Parameters are the coefficients followed by the intercept.
        let mut theta = vec![0.0; features + 1];
        let mut iterations = 0;
        let mut converged = false;
        let mut loss = problem.loss(&theta);
        while iterations < options.max_iter {
            let (gradient, hessian) = problem.derivatives(&theta);
            let max_gradient = gradient.iter().fold(0.0, |m: f64, g| m.max(g.abs()));
            tracing::debug!(iteration = iterations, loss, max_gradient, "newton step");
            if max_gradient <= threshold {
                converged = true;
                break;
            }

            let direction = solve(hessian, gradient.clone()).ok_or(FitError::Singular)?;
            let slope = dot(&gradient, &direction);
            let mut step = 1.0;
            let mut candidate = axpy(&theta, -step, &direction);
            let mut candidate_loss = problem.loss(&candidate);
            while candidate_loss > loss - 1e-4 * step * slope && step > 1e-10 {
                step *= 0.5;
                candidate = axpy(&theta, -step, &direction);
                candidate_loss = problem.loss(&candidate);
            }
            theta = candidate;
            loss = candidate_loss;
            iterations += 1;
        }

        if !converged {
            // Check whether the final step landed inside the tolerance.
            let (gradient, _) = problem.derivatives(&theta);
            converged = gradient.iter().all(|g| g.abs() <= threshold);
        }
        if !converged {
            tracing::warn!(
                max_iter = options.max_iter,
                "logistic regression did not converge"
            );
        }

        let intercept = theta.pop().unwrap_or(0.0);
        Ok(Self {
            coefficients: theta,
            intercept,
            iterations,
            converged,
        })
    }

    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of Newton iterations performed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[must_use]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Returns the linear score `w·x + b`.
    pub fn decision_function(&self, x: &[f64]) -> Result<f64, FitError> {
        if x.len() != self.coefficients.len() {
            return Err(FitError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: x.len(),
            });
        }
        Ok(dot(&self.coefficients, x) + self.intercept)
    }

    /// Returns the probability of the positive class.
    pub fn predict_probability(&self, x: &[f64]) -> Result<f64, FitError> {
        self.decision_function(x).map(sigmoid)
    }
}

struct Problem<'a> {
    x: &'a [Vec<f64>],
    y: &'a [bool],
    c: f64,
}

impl Problem<'_> {
    fn score(theta: &[f64], row: &[f64]) -> f64 {
        let (weights, intercept) = theta.split_at(row.len());
        dot(weights, row) + intercept[0]
    }

    fn loss(&self, theta: &[f64]) -> f64 {
        let features = theta.len() - 1;
        let penalty = 0.5 * theta[..features].iter().map(|w| w * w).sum::<f64>();
        let data = self
            .x
            .iter()
            .zip(self.y)
            .map(|(row, &label)| {
                let z = Self::score(theta, row);
                softplus(z) - if label { z } else { 0.0 }
            })
            .sum::<f64>();
        penalty + self.c * data
    }

    fn derivatives(&self, theta: &[f64]) -> (Vec<f64>, Vec<Vec<f64>>) {
        let dim = theta.len();
        let features = dim - 1;
        let mut gradient = vec![0.0; dim];
        let mut hessian = vec![vec![0.0; dim]; dim];

        for (row, &label) in self.x.iter().zip(self.y) {
            let p = sigmoid(Self::score(theta, row));
            let residual = p - if label { 1.0 } else { 0.0 };
            let weight = p * (1.0 - p);
            let augmented = row.iter().copied().chain([1.0]);
            for (i, xi) in augmented.clone().enumerate() {
                gradient[i] += self.c * residual * xi;
                for (j, xj) in augmented.clone().enumerate().skip(i) {
                    hessian[i][j] += self.c * weight * xi * xj;
                }
            }
        }
        for i in 0..dim {
            for j in 0..i {
                hessian[i][j] = hessian[j][i];
            }
        }
        for i in 0..features {
            gradient[i] += theta[i];
            hessian[i][i] += 1.0;
        }
        (gradient, hessian)
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn softplus(z: f64) -> f64 {
    z.max(0.0) + (-z.abs()).exp().ln_1p()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn axpy(x: &[f64], alpha: f64, y: &[f64]) -> Vec<f64> {
    x.iter().zip(y).map(|(x, y)| x + alpha * y).collect()
}

/// Solves `a · s = b` by Gaussian elimination with partial pivoting.
///
/// Returns `None` when a pivot vanishes.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);
        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut s = vec![0.0; n];
    for row in (0..n).rev() {
        let tail = (row + 1..n).map(|k| a[row][k] * s[k]).sum::<f64>();
        s[row] = (b[row] - tail) / a[row][row];
    }
    Some(s)
}
