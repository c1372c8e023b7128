use std::f64::consts::TAU;

use rand::Rng;

use super::config::NetworkConfig;
use super::types::{ColorVariant, Node, Viewport};

/// Uniform sample in `[start, end)`; never panics on an empty range.
fn lerp(rng: &mut (impl Rng + ?Sized), start: f64, end: f64) -> f64 {
	start + rng.r#gen::<f64>() * (end - start)
}

/// Produce `count` nodes spread uniformly over the viewport.
///
/// Returns an empty field for a viewport that cannot be drawn.
pub fn generate_nodes<R: Rng + ?Sized>(
	count: usize,
	viewport: Viewport,
	config: &NetworkConfig,
	rng: &mut R,
) -> Vec<Node> {
	if !viewport.is_renderable() {
		return Vec::new();
	}
	let v = config.initial_velocity;

	(0..count)
		.map(|id| Node {
			id,
			x: lerp(rng, 0.0, viewport.width),
			y: lerp(rng, 0.0, viewport.height),
			vx: lerp(rng, -v, v),
			vy: lerp(rng, -v, v),
			size: lerp(rng, config.radius_range.start, config.radius_range.end),
			opacity: lerp(rng, config.opacity_range.start, config.opacity_range.end),
			phase: lerp(rng, 0.0, TAU),
			variant: if rng.r#gen::<f64>() < config.accent_fraction {
				ColorVariant::Accent
			} else {
				ColorVariant::Primary
			},
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn field(seed: u64, count: usize) -> Vec<Node> {
		let mut rng = StdRng::seed_from_u64(seed);
		generate_nodes(
			count,
			Viewport::new(800.0, 600.0),
			&NetworkConfig::default(),
			&mut rng,
		)
	}

	#[test]
	fn same_seed_same_field() {
		assert_eq!(field(42, 25), field(42, 25));
		assert_ne!(field(42, 25), field(43, 25));
	}

	#[test]
	fn attributes_stay_in_their_ranges() {
		let nodes = field(7, 500);
		assert_eq!(nodes.len(), 500);
		for (i, n) in nodes.iter().enumerate() {
			assert_eq!(n.id, i);
			assert!((0.0..800.0).contains(&n.x));
			assert!((0.0..600.0).contains(&n.y));
			assert!(n.vx.abs() <= 0.15 && n.vy.abs() <= 0.15);
			assert!((3.0..7.0).contains(&n.size));
			assert!((0.2..0.5).contains(&n.opacity));
			assert!((0.0..TAU).contains(&n.phase));
		}
	}

	#[test]
	fn accent_is_a_minority() {
		let nodes = field(11, 2000);
		let accents = nodes
			.iter()
			.filter(|n| n.variant == ColorVariant::Accent)
			.count();
		let share = accents as f64 / nodes.len() as f64;
		assert!((0.25..0.35).contains(&share), "accent share {share}");
	}

	#[test]
	fn accent_fraction_extremes() {
		let mut rng = StdRng::seed_from_u64(1);
		let viewport = Viewport::new(100.0, 100.0);
		let none = NetworkConfig {
			accent_fraction: 0.0,
			..NetworkConfig::default()
		};
		let all = NetworkConfig {
			accent_fraction: 1.0,
			..NetworkConfig::default()
		};
		assert!(
			generate_nodes(50, viewport, &none, &mut rng)
				.iter()
				.all(|n| n.variant == ColorVariant::Primary)
		);
		assert!(
			generate_nodes(50, viewport, &all, &mut rng)
				.iter()
				.all(|n| n.variant == ColorVariant::Accent)
		);
	}

	#[test]
	fn empty_viewport_yields_no_nodes() {
		let mut rng = StdRng::seed_from_u64(3);
		let config = NetworkConfig::default();
		assert!(generate_nodes(10, Viewport::new(0.0, 600.0), &config, &mut rng).is_empty());
		assert!(generate_nodes(10, Viewport::new(800.0, f64::NAN), &config, &mut rng).is_empty());
	}
}
