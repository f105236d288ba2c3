//! Linear-kernel soft-margin SVM trained by deterministic full-batch
//! subgradient descent on the primal hinge-loss objective:
//!
//!   (lambda / 2) * ||w||^2 + (1/n) * sum max(0, 1 - y * (w.x + b))
//!
//! with lambda = 1 / (C * n) and the default C = 1.0. The step schedule is
//! the standard 1/(lambda * t). Training touches every sample each epoch in
//! input order, so identical inputs always produce identical weights.

#[derive(Debug, Clone)]
pub struct LinearSvm {
    pub weights: Vec<f64>,
    pub bias: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SvmParams {
    pub c: f64,
    pub epochs: usize,
}

impl Default for SvmParams {
    fn default() -> Self {
        Self {
            c: 1.0,
            epochs: 1000,
        }
    }
}

impl LinearSvm {
    /// Train on rows of `features` with labels in {-1, +1}.
    pub fn train(features: &[Vec<f64>], labels: &[f64], params: SvmParams) -> LinearSvm {
        debug_assert_eq!(features.len(), labels.len());
        debug_assert!(!features.is_empty());

        let n = features.len();
        let dim = features[0].len();
        let lambda = 1.0 / (params.c * n as f64);

        let mut weights = vec![0.0; dim];
        let mut bias = 0.0;

        for t in 1..=params.epochs {
            let eta = 1.0 / (lambda * t as f64);

            let mut grad_w = vec![0.0; dim];
            let mut grad_b = 0.0;
            for (x, &y) in features.iter().zip(labels.iter()) {
                let margin = y * (dot(&weights, x) + bias);
                if margin < 1.0 {
                    for (g, &xi) in grad_w.iter_mut().zip(x.iter()) {
                        *g += y * xi;
                    }
                    grad_b += y;
                }
            }

            let shrink = 1.0 - eta * lambda;
            for (w, g) in weights.iter_mut().zip(grad_w.iter()) {
                *w = shrink * *w + eta * g / n as f64;
            }
            bias += eta * grad_b / n as f64;
        }

        LinearSvm { weights, bias }
    }

    pub fn decision(&self, x: &[f64]) -> f64 {
        dot(&self.weights, x) + self.bias
    }

    /// Predicted side of the hyperplane: +1 or -1. Points exactly on the
    /// boundary go to +1.
    pub fn predict(&self, x: &[f64]) -> f64 {
        if self.decision(x) >= 0.0 { 1.0 } else { -1.0 }
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
