//! Ordinary least squares over the five model features.
//!
//! Features are standardized first, which centers every column. The
//! intercept is then the target mean and the coefficients solve the 5×5
//! normal equations `(ZᵀZ + λI) β = Zᵀ(y − ȳ)`.
use super::*;
use nfl_core::*;
use nfl_dto::Frame;

/// Diagonal loading that keeps constant columns solvable.
const RIDGE: f64 = 1e-8;
/// Pivots smaller than this mean the system is singular.
const PIVOT_MIN: f64 = 1e-12;

/// One training row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: Features,
    pub y: Points,
}

/// Training rows from a statistics frame. Rows with a missing or
/// non-numeric feature or target are skipped.
pub fn samples(frame: &Frame) -> Vec<Sample> {
    let column = |name: &str| frame.columns().iter().position(|c| c == name);
    let Some(target) = column(TARGET) else {
        return Vec::new();
    };
    let Some(inputs) = FEATURES
        .iter()
        .map(|f| column(f.name))
        .collect::<Option<Vec<usize>>>()
    else {
        return Vec::new();
    };
    frame
        .rows()
        .filter_map(|(_, row)| {
            let mut x = [0.0; 5];
            for (slot, j) in x.iter_mut().zip(inputs.iter()) {
                *slot = row[*j].as_f64()?;
            }
            let y = row[target].as_f64()?;
            Some(Sample {
                x: Features::from(x),
                y,
            })
        })
        .collect()
}

pub fn fit(samples: &[Sample]) -> Result<Model, Error> {
    let p = FEATURES.len();
    let n = samples.len();
    if n <= p {
        return Err(Error::validation("samples", &n.to_string()));
    }
    let nf = n as f64;
    let mean = (0..p)
        .map(|j| samples.iter().map(|s| s.x.values()[j]).sum::<f64>() / nf)
        .collect::<Vec<f64>>();
    let scale = (0..p)
        .map(|j| {
            let var = samples
                .iter()
                .map(|s| (s.x.values()[j] - mean[j]).powi(2))
                .sum::<f64>()
                / nf;
            var.sqrt()
        })
        .collect::<Vec<f64>>();
    let scaler = Scaler { mean, scale };
    let ybar = samples.iter().map(|s| s.y).sum::<f64>() / nf;
    let z = samples
        .iter()
        .map(|s| scaler.apply(s.x.values()))
        .collect::<Vec<Vec<f64>>>();
    let mut a = vec![vec![0.0; p]; p];
    let mut b = vec![0.0; p];
    for (row, s) in z.iter().zip(samples.iter()) {
        for i in 0..p {
            b[i] += row[i] * (s.y - ybar);
            for j in 0..p {
                a[i][j] += row[i] * row[j];
            }
        }
    }
    for (i, r) in a.iter_mut().enumerate() {
        r[i] += RIDGE * nf;
    }
    let coefficients =
        solve(a, b).ok_or_else(|| Error::Integrity("singular design matrix".into()))?;
    let model = Model {
        version: MODEL_VERSION,
        target: TARGET.to_string(),
        features: feature_names().into_iter().map(String::from).collect(),
        scaler: Some(scaler),
        coefficients,
        intercept: ybar,
    };
    log::debug!("fit {} samples: {:?}", n, model.coefficients);
    Ok(model)
}

/// Coefficient of determination of `model` over `samples`.
pub fn r2(model: &Model, samples: &[Sample]) -> f64 {
    let n = samples.len() as f64;
    let ybar = samples.iter().map(|s| s.y).sum::<f64>() / n;
    let ss_tot = samples.iter().map(|s| (s.y - ybar).powi(2)).sum::<f64>();
    let ss_res = samples
        .iter()
        .map(|s| (s.y - model.predict(&s.x)).powi(2))
        .sum::<f64>();
    if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else if ss_res == 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Gaussian elimination with partial pivoting.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < PIVOT_MIN {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);
        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail = (row + 1..n).map(|k| a[row][k] * x[k]).sum::<f64>();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfl_dto::Cell;

    fn truth(x: &[f64; 5]) -> f64 {
        3.0 + 2.0 * x[0] - 1.0 * x[1] + 0.5 * x[2] + 1.5 * x[4]
    }

    fn synthetic(n: usize) -> Vec<Sample> {
        (0..n)
            .map(|i| {
                let x = [0, 1, 2, 3, 4].map(|j| ((i * (j + 3) * 7919 + j * 31) % 101) as f64 / 10.0);
                Sample {
                    x: Features::from(x),
                    y: truth(&x),
                }
            })
            .collect()
    }

    #[test]
    fn recovers_exact_linear_relation() {
        let data = synthetic(40);
        let model = fit(&data).unwrap();
        assert!(model.validate().is_ok());
        for s in data.iter() {
            assert!((model.predict(&s.x) - s.y).abs() < 1e-4);
        }
        assert!(r2(&model, &data) > 0.999_999);
    }

    #[test]
    fn too_few_samples() {
        let err = fit(&synthetic(5)).unwrap_err();
        assert_eq!(err, Error::validation("samples", "5"));
    }

    #[test]
    fn constant_column_gets_zero_weight() {
        let data = synthetic(30)
            .into_iter()
            .map(|s| {
                let mut x = *s.x.values();
                x[3] = 7.0;
                Sample {
                    x: Features::from(x),
                    y: s.y,
                }
            })
            .collect::<Vec<_>>();
        let model = fit(&data).unwrap();
        assert!(model.coefficients[3].abs() < 1e-6);
    }

    #[test]
    fn solve_small_system() {
        let a = vec![vec![0.0, 2.0], vec![1.0, 1.0]];
        let x = solve(a, vec![4.0, 3.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
        assert!(solve(vec![vec![1.0, 2.0], vec![2.0, 4.0]], vec![1.0, 2.0]).is_none());
    }

    #[test]
    fn samples_skip_incomplete_rows() {
        let mut columns = feature_names();
        columns.push(TARGET);
        let mut frame = Frame::new(columns);
        frame.push(
            "Chicago".into(),
            vec![
                Cell::Real(0.4),
                Cell::Real(6.0),
                Cell::Integer(20),
                Cell::Integer(10),
                Cell::Integer(100),
                Cell::Integer(300),
            ],
        );
        frame.push(
            "Miami".into(),
            vec![
                Cell::Real(0.4),
                Cell::Null,
                Cell::Integer(20),
                Cell::Integer(10),
                Cell::Integer(100),
                Cell::Integer(300),
            ],
        );
        let rows = samples(&frame);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].y, 300.0);
        assert_eq!(rows[0].x.values()[2], 20.0);
    }
}
