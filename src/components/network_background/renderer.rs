use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::NetworkConfig;
use super::field::generate_nodes;
use super::scene::{Scene, build_scene};
use super::simulation::{SimulationState, TickInput};
use super::types::Viewport;

/// Owns the one simulation behind a `NetworkBackground`.
///
/// The animation loop and the resize handler share a single instance, so
/// every tick sees the count and threshold of the latest viewport.
pub struct NetworkRenderer {
	config: NetworkConfig,
	rng: StdRng,
	viewport: Viewport,
	connection_distance: f64,
	state: SimulationState,
}

impl NetworkRenderer {
	/// A renderer with no field yet; call [`resize`](Self::resize) to populate it.
	pub fn new(config: NetworkConfig, rng: StdRng) -> Self {
		Self {
			config,
			rng,
			viewport: Viewport::default(),
			connection_distance: 0.0,
			state: SimulationState::default(),
		}
	}

	/// Seeded from the platform entropy source.
	pub fn from_entropy(config: NetworkConfig) -> Self {
		Self::new(config, StdRng::from_entropy())
	}

	/// Last applied viewport.
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Latest published simulation state.
	pub fn state(&self) -> &SimulationState {
		&self.state
	}

	/// Apply a (debounced) viewport size, regenerating the field when it
	/// changed. Returns whether a new field was generated.
	pub fn resize(&mut self, viewport: Viewport) -> bool {
		if viewport == self.viewport {
			return false;
		}
		self.viewport = viewport;

		let tier = if viewport.is_renderable() {
			self.config.tier_for_width(viewport.width).cloned()
		} else {
			None
		};
		let Some(tier) = tier else {
			self.connection_distance = 0.0;
			self.state = SimulationState::default();
			debug!(
				"network field cleared for {}x{}",
				viewport.width, viewport.height
			);
			return true;
		};

		let nodes = generate_nodes(tier.node_count, viewport, &self.config, &mut self.rng);
		self.connection_distance = tier.connection_distance;
		self.state = SimulationState::new(nodes, tier.connection_distance, &self.config);
		debug!(
			"network field regenerated: tier={} nodes={} threshold={} viewport={}x{}",
			tier.name,
			self.state.nodes.len(),
			tier.connection_distance,
			viewport.width,
			viewport.height
		);
		true
	}

	/// Advance one tick, publishing the new state only once it is complete.
	pub fn tick(&mut self, reduced_motion: bool) {
		if reduced_motion || !self.viewport.is_renderable() {
			return;
		}
		let input = TickInput {
			viewport: self.viewport,
			connection_distance: self.connection_distance,
			reduced_motion,
			config: &self.config,
		};
		self.state = self.state.advance(&input, &mut self.rng);
	}

	/// Shapes for the current frame, or `None` when nothing can be drawn.
	pub fn scene(&self, reduced_motion: bool) -> Option<Scene> {
		build_scene(&self.state, self.viewport, &self.config, reduced_motion)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn renderer(seed: u64) -> NetworkRenderer {
		NetworkRenderer::new(NetworkConfig::default(), StdRng::seed_from_u64(seed))
	}

	#[test]
	fn starts_empty() {
		let r = renderer(1);
		assert!(r.state().nodes.is_empty());
		assert!(r.scene(false).is_none());
	}

	#[test]
	fn resize_picks_tier_and_regenerates() {
		let mut r = renderer(1);
		assert!(r.resize(Viewport::new(400.0, 800.0)));
		assert_eq!(r.state().nodes.len(), 15);
		assert!(r.resize(Viewport::new(1920.0, 1080.0)));
		assert_eq!(r.state().nodes.len(), 45);
		assert_eq!(r.state().frame, 0);
	}

	#[test]
	fn same_size_keeps_the_field() {
		let mut r = renderer(2);
		r.resize(Viewport::new(800.0, 600.0));
		r.tick(false);
		let before = r.state().clone();
		assert!(!r.resize(Viewport::new(800.0, 600.0)));
		assert_eq!(r.state(), &before);
	}

	#[test]
	fn reduced_motion_skips_ticks() {
		let mut r = renderer(3);
		r.resize(Viewport::new(800.0, 600.0));
		let before = r.state().clone();
		r.tick(true);
		r.tick(true);
		assert_eq!(r.state(), &before);
		assert_eq!(r.scene(true), r.scene(true));
	}

	#[test]
	fn ticks_advance_time_and_frame() {
		let mut r = renderer(4);
		r.resize(Viewport::new(800.0, 600.0));
		for _ in 0..5 {
			r.tick(false);
		}
		assert_eq!(r.state().frame, 5);
		assert!((r.state().time - 0.08).abs() < 1e-9);
	}

	#[test]
	fn collapsing_viewport_clears_everything() {
		let mut r = renderer(5);
		r.resize(Viewport::new(800.0, 600.0));
		assert!(r.resize(Viewport::new(0.0, 0.0)));
		r.tick(false);
		assert!(r.state().nodes.is_empty());
		assert!(r.scene(false).is_none());
	}

	#[test]
	fn same_seed_same_trajectory() {
		let run = |seed| {
			let mut r = renderer(seed);
			r.resize(Viewport::new(1280.0, 720.0));
			for _ in 0..30 {
				r.tick(false);
			}
			r.state().clone()
		};
		assert_eq!(run(9), run(9));
	}
}
