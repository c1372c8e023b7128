//! Frame Renderer: turns a [`SimulationState`] into flat drawing layers.
//!
//! Building a [`Scene`] only reads the state, so it is safe to call on
//! every animation frame.

use super::config::{NetworkConfig, PulseConfig};
use super::simulation::SimulationState;
use super::types::{ColorVariant, Viewport};

/// Size and alpha multipliers for one node at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
	/// Applied to halo and core radius.
	pub radius: f64,
	/// Applied to halo and core opacity.
	pub opacity: f64,
}

impl Pulse {
	/// No breathing.
	pub const STILL: Pulse = Pulse {
		radius: 1.0,
		opacity: 1.0,
	};

	/// Multipliers at simulated time `t` for a node with phase `phase`.
	pub fn at(config: &PulseConfig, t: f64, phase: f64, reduced_motion: bool) -> Self {
		if reduced_motion {
			return Self::STILL;
		}
		Self {
			radius: 1.0 + (config.radius_frequency * t + phase).sin() * config.radius_amplitude,
			opacity: config.opacity_base
				+ (config.opacity_frequency * t + phase).sin() * config.opacity_amplitude,
		}
	}
}

/// A connection as drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
	/// Start x.
	pub x1: f64,
	/// Start y.
	pub y1: f64,
	/// End x.
	pub x2: f64,
	/// End y.
	pub y2: f64,
	/// Stroke alpha.
	pub opacity: f64,
	/// Stroke colour.
	pub variant: ColorVariant,
}

/// A halo or a core.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
	/// Centre x.
	pub x: f64,
	/// Centre y.
	pub y: f64,
	/// Radius after pulsing.
	pub radius: f64,
	/// Alpha after pulsing.
	pub opacity: f64,
	/// Fill colour.
	pub variant: ColorVariant,
}

/// Drawable output of one frame, painted back to front:
/// `lines`, then `halos`, then `cores`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// Area to clear before drawing.
	pub viewport: Viewport,
	/// Connections, bottom layer.
	pub lines: Vec<Line>,
	/// Soft glow under each node.
	pub halos: Vec<Circle>,
	/// Node bodies, top layer.
	pub cores: Vec<Circle>,
}

impl Scene {
	/// Whether the frame draws anything at all.
	pub fn is_empty(&self) -> bool {
		self.lines.is_empty() && self.halos.is_empty() && self.cores.is_empty()
	}
}

/// `None` when the viewport cannot be drawn.
pub fn build_scene(
	state: &SimulationState,
	viewport: Viewport,
	config: &NetworkConfig,
	reduced_motion: bool,
) -> Option<Scene> {
	if !viewport.is_renderable() {
		return None;
	}

	let lines = state
		.connections
		.iter()
		.map(|c| Line {
			x1: c.x1,
			y1: c.y1,
			x2: c.x2,
			y2: c.y2,
			opacity: c.opacity,
			variant: c.variant,
		})
		.collect();

	let mut halos = Vec::with_capacity(state.nodes.len());
	let mut cores = Vec::with_capacity(state.nodes.len());
	for node in &state.nodes {
		let pulse = Pulse::at(&config.pulse, state.time, node.phase, reduced_motion);
		let radius = node.size * pulse.radius;
		let opacity = node.opacity * pulse.opacity;
		halos.push(Circle {
			x: node.x,
			y: node.y,
			radius: radius * config.halo_scale,
			opacity: opacity * config.halo_opacity,
			variant: node.variant,
		});
		cores.push(Circle {
			x: node.x,
			y: node.y,
			radius,
			opacity,
			variant: node.variant,
		});
	}

	Some(Scene {
		viewport,
		lines,
		halos,
		cores,
	})
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use super::super::simulation::compute_connections;
	use super::super::types::Node;
	use super::*;

	fn state_at(time: f64) -> SimulationState {
		let nodes = vec![
			Node {
				id: 0,
				x: 100.0,
				y: 100.0,
				vx: 0.0,
				vy: 0.0,
				size: 4.0,
				opacity: 0.4,
				phase: FRAC_PI_2,
				variant: ColorVariant::Primary,
			},
			Node {
				id: 1,
				x: 150.0,
				y: 100.0,
				vx: 0.0,
				vy: 0.0,
				size: 6.0,
				opacity: 0.2,
				phase: 0.0,
				variant: ColorVariant::Accent,
			},
		];
		let connections = compute_connections(&nodes, 100.0, 0.25);
		SimulationState {
			nodes,
			connections,
			time,
			frame: 0,
		}
	}

	#[test]
	fn pulse_peaks_at_quarter_turn() {
		let pulse = Pulse::at(&PulseConfig::default(), 0.0, FRAC_PI_2, false);
		assert!((pulse.radius - 1.25).abs() < 1e-12);
		assert!((pulse.opacity - 1.0).abs() < 1e-12);
	}

	#[test]
	fn reduced_motion_is_still() {
		for t in [0.0, 0.7, 13.3] {
			assert_eq!(Pulse::at(&PulseConfig::default(), t, 1.0, true), Pulse::STILL);
		}
	}

	#[test]
	fn layers_follow_nodes_and_connections() {
		let config = NetworkConfig::default();
		let scene = build_scene(&state_at(0.0), Viewport::new(800.0, 600.0), &config, false).unwrap();
		assert_eq!(scene.lines.len(), 1);
		assert_eq!(scene.lines[0].variant, ColorVariant::Accent);
		assert_eq!(scene.halos.len(), 2);
		assert_eq!(scene.cores.len(), 2);

		let (halo, core) = (&scene.halos[0], &scene.cores[0]);
		assert!((core.radius - 5.0).abs() < 1e-12);
		assert!((halo.radius - 15.0).abs() < 1e-12);
		assert!((core.opacity - 0.4).abs() < 1e-12);
		assert!((halo.opacity - 0.1).abs() < 1e-12);
	}

	#[test]
	fn reduced_motion_draws_base_shapes() {
		let config = NetworkConfig::default();
		let viewport = Viewport::new(800.0, 600.0);
		let a = build_scene(&state_at(1.0), viewport, &config, true).unwrap();
		let b = build_scene(&state_at(1.0), viewport, &config, true).unwrap();
		assert_eq!(a, b);
		assert_eq!(a.cores[1].radius, 6.0);
		assert_eq!(a.cores[1].opacity, 0.2);
	}

	#[test]
	fn building_does_not_touch_state() {
		let state = state_at(2.5);
		let before = state.clone();
		let _ = build_scene(&state, Viewport::new(800.0, 600.0), &NetworkConfig::default(), false);
		assert_eq!(state, before);
	}

	#[test]
	fn zero_viewport_has_no_scene() {
		let config = NetworkConfig::default();
		assert!(build_scene(&state_at(0.0), Viewport::new(0.0, 600.0), &config, false).is_none());
		assert!(
			build_scene(&SimulationState::default(), Viewport::new(10.0, 10.0), &config, false)
				.unwrap()
				.is_empty()
		);
	}
}
