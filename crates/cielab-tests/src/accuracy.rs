//! Accuracy measurement against the reference implementation
//!
//! Differences are reported as CIEDE2000, which tracks perceived difference
//! far better than per-component error. A CIEDE2000 of 1.0 is roughly the
//! smallest difference a trained observer notices.

use cielab_core::{Lab, Rgb8};

use crate::reference::{ciede2000, srgb_to_lab_palette};

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a list of deltaE values
    pub fn from_samples(mut delta_es: Vec<f64>) -> Self {
        delta_es.sort_by(f64::total_cmp);

        let count = delta_es.len();
        let mean = if count == 0 {
            0.0
        } else {
            delta_es.iter().sum::<f64>() / count as f64
        };
        let max = delta_es.last().copied().unwrap_or(0.0);
        let p95_idx = (count as f64 * 0.95) as usize;
        let p95 = delta_es
            .get(p95_idx.min(count.saturating_sub(1)))
            .copied()
            .unwrap_or(0.0);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }
}

/// Compare cielab-core's sRGB → Lab against palette for every color
pub fn compare_rgb_to_lab(colors: &[Rgb8]) -> DeltaEStats {
    let delta_es = colors
        .iter()
        .map(|rgb| {
            let ours = Lab::from_rgb8(*rgb).to_array();
            let theirs = srgb_to_lab_palette(rgb.to_array());
            ciede2000(ours, theirs)
        })
        .collect();

    DeltaEStats::from_samples(delta_es)
}

/// Largest per-channel difference between two RGB triples
pub fn max_channel_diff(a: [u8; 3], b: [u8; 3]) -> u8 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.abs_diff(*y))
        .max()
        .unwrap_or(0)
}
