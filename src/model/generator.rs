//! Random problem instances.

use super::types::{Point, Rectangle};
use crate::random::{create_rng, uniform};

/// Where and how large generated tunnels are.
///
/// Centres are drawn uniformly from `[x0, x0 + dx] × [y0, y0 + dy]`,
/// widths and heights uniformly from their ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceConfig {
    pub origin: Point,
    pub dx: f64,
    pub dy: f64,
    pub width_range: (f64, f64),
    pub height_range: (f64, f64),
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            dx: 10.0,
            dy: 10.0,
            width_range: (1.0, 2.0),
            height_range: (1.0, 2.0),
        }
    }
}

impl InstanceConfig {
    /// Sets the centre area to `[x0, x0 + dx] × [y0, y0 + dy]`.
    pub fn with_area(mut self, x0: f64, y0: f64, dx: f64, dy: f64) -> Self {
        self.origin = Point::new(x0, y0);
        self.dx = dx;
        self.dy = dy;
        self
    }

    pub fn with_width_range(mut self, lo: f64, hi: f64) -> Self {
        self.width_range = (lo, hi);
        self
    }

    pub fn with_height_range(mut self, lo: f64, hi: f64) -> Self {
        self.height_range = (lo, hi);
        self
    }
}

/// Generates `n` axis-aligned tunnels with ids `1..=n`.
///
/// The same `seed` always yields the same instance.
pub fn random_instance(n: usize, config: &InstanceConfig, seed: Option<u64>) -> Vec<Rectangle> {
    let mut rng = create_rng(seed);
    let Point { x: x0, y: y0 } = config.origin;

    (1..=n)
        .map(|id| {
            let cx = uniform(&mut rng, x0, x0 + config.dx);
            let cy = uniform(&mut rng, y0, y0 + config.dy);
            let w = uniform(&mut rng, config.width_range.0, config.width_range.1);
            let h = uniform(&mut rng, config.height_range.0, config.height_range.1);
            Rectangle::axis_aligned(
                id as u32,
                cx - w / 2.0,
                cy - h / 2.0,
                cx + w / 2.0,
                cy + h / 2.0,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_ids() {
        let rects = random_instance(6, &InstanceConfig::default(), Some(2));
        assert_eq!(rects.len(), 6);
        let ids: Vec<u32> = rects.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_within_bounds() {
        let config = InstanceConfig::default()
            .with_area(-5.0, 10.0, 20.0, 4.0)
            .with_width_range(1.0, 3.0)
            .with_height_range(0.5, 0.5);
        for r in random_instance(50, &config, Some(9)) {
            let [bl, br, tr, tl] = r.corners;
            let w = br.x - bl.x;
            let h = tl.y - bl.y;
            assert!((1.0 - 1e-9..=3.0 + 1e-9).contains(&w), "width {w}");
            assert!((h - 0.5).abs() < 1e-9, "height {h}");
            let cx = (bl.x + tr.x) / 2.0;
            let cy = (bl.y + tr.y) / 2.0;
            assert!((-5.0 - 1e-9..=15.0 + 1e-9).contains(&cx));
            assert!((10.0 - 1e-9..=14.0 + 1e-9).contains(&cy));
        }
    }

    #[test]
    fn test_seeded_reproducible() {
        let config = InstanceConfig::default();
        assert_eq!(
            random_instance(8, &config, Some(42)),
            random_instance(8, &config, Some(42))
        );
        assert_ne!(
            random_instance(8, &config, Some(42)),
            random_instance(8, &config, Some(43))
        );
    }

    #[test]
    fn test_empty() {
        assert!(random_instance(0, &InstanceConfig::default(), None).is_empty());
    }
}
