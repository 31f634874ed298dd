//! Latent semantic analysis sentence ranking.
//!
//! Builds a smoothed term-by-sentence frequency matrix `A`, eigen-decomposes
//! the Gram matrix `AᵀA` (whose eigenvalues are the squared singular values of
//! `A` and whose eigenvectors are its right singular vectors) and ranks every
//! sentence by `sqrt(Σₖ σₖ² · vₖ[i]²)` over the strongest `k` topics.

use std::collections::HashMap;

/// Weight given to absent terms; present terms scale from here up to 1.0.
const SMOOTHING: f64 = 0.4;
/// Fewest latent dimensions kept, when the matrix has that many.
const MIN_DIMENSIONS: usize = 3;
const MAX_SWEEPS: usize = 64;
const CONVERGENCE: f64 = 1e-12;

/// Ranks sentences given their (already normalized) terms.
///
/// `reduction_ratio` is the share of latent dimensions kept (1.0 keeps all).
/// Returns one rank per sentence, or an empty vector when there are no terms.
pub fn rank_sentences(sentences: &[Vec<String>], reduction_ratio: f64) -> Vec<f64> {
    let matrix = term_frequency_matrix(sentences);
    if matrix.is_empty() {
        return Vec::new();
    }

    let gram = gram_matrix(&matrix, sentences.len());
    let (eigenvalues, eigenvectors) = jacobi_eigen(gram);

    let mut order: Vec<usize> = (0..eigenvalues.len()).collect();
    order.sort_by(|&a, &b| eigenvalues[b].total_cmp(&eigenvalues[a]));

    let wanted = ((eigenvalues.len() as f64) * reduction_ratio) as usize;
    let dimensions = wanted.max(MIN_DIMENSIONS).min(eigenvalues.len());

    (0..sentences.len())
        .map(|sentence| {
            order
                .iter()
                .take(dimensions)
                .map(|&k| eigenvalues[k].max(0.0) * eigenvectors[sentence][k].powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .collect()
}

/// Rows are terms, columns are sentences.
fn term_frequency_matrix(sentences: &[Vec<String>]) -> Vec<Vec<f64>> {
    let mut dictionary: HashMap<&str, usize> = HashMap::new();
    for term in sentences.iter().flatten() {
        let next = dictionary.len();
        dictionary.entry(term.as_str()).or_insert(next);
    }
    if dictionary.is_empty() {
        return Vec::new();
    }

    let mut matrix = vec![vec![0.0; sentences.len()]; dictionary.len()];
    for (col, terms) in sentences.iter().enumerate() {
        for term in terms {
            matrix[dictionary[term.as_str()]][col] += 1.0;
        }
    }

    for col in 0..sentences.len() {
        let max_frequency = matrix.iter().map(|row| row[col]).fold(0.0, f64::max);
        if max_frequency > 0.0 {
            for row in matrix.iter_mut() {
                row[col] = SMOOTHING + (1.0 - SMOOTHING) * row[col] / max_frequency;
            }
        }
    }

    matrix
}

fn gram_matrix(matrix: &[Vec<f64>], n: usize) -> Vec<Vec<f64>> {
    let mut gram = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let dot: f64 = matrix.iter().map(|row| row[i] * row[j]).sum();
            gram[i][j] = dot;
            gram[j][i] = dot;
        }
    }
    gram
}

/// Cyclic Jacobi eigenvalue algorithm for a symmetric matrix.
///
/// Returns the eigenvalues and a matrix whose columns are the eigenvectors.
fn jacobi_eigen(mut a: Vec<Vec<f64>>) -> (Vec<f64>, Vec<Vec<f64>>) {
    let n = a.len();
    let mut v = vec![vec![0.0; n]; n];
    for (i, row) in v.iter_mut().enumerate() {
        row[i] = 1.0;
    }

    for _ in 0..MAX_SWEEPS {
        let off_diagonal: f64 = (0..n)
            .flat_map(|p| ((p + 1)..n).map(move |q| (p, q)))
            .map(|(p, q)| a[p][q] * a[p][q])
            .sum();
        if off_diagonal < CONVERGENCE {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                if a[p][q].abs() < f64::MIN_POSITIVE {
                    continue;
                }

                let theta = (a[q][q] - a[p][p]) / (2.0 * a[p][q]);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for row in a.iter_mut() {
                    let (akp, akq) = (row[p], row[q]);
                    row[p] = c * akp - s * akq;
                    row[q] = s * akp + c * akq;
                }
                for k in 0..n {
                    let (apk, aqk) = (a[p][k], a[q][k]);
                    a[p][k] = c * apk - s * aqk;
                    a[q][k] = s * apk + c * aqk;
                }
                for row in v.iter_mut() {
                    let (vkp, vkq) = (row[p], row[q]);
                    row[p] = c * vkp - s * vkq;
                    row[q] = s * vkp + c * vkq;
                }
            }
        }
    }

    let eigenvalues = (0..n).map(|i| a[i][i]).collect();
    (eigenvalues, v)
}
