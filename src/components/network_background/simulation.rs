//! Per-tick motion and the throttled proximity graph.
//!
//! [`SimulationState::advance`] never mutates its receiver: it returns the
//! next state, so a frame always reads a fully updated node set.

use rand::Rng;

use super::config::NetworkConfig;
use super::types::{Connection, Node, Viewport};

/// "Every `interval`-th tick" as an explicit counter test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
	interval: u64,
}

impl Throttle {
	/// An interval of zero is treated as one, i.e. every tick.
	pub fn every(interval: u64) -> Self {
		Self {
			interval: interval.max(1),
		}
	}

	/// Whether work is due on `frame`.
	pub fn is_due(&self, frame: u64) -> bool {
		frame % self.interval == 0
	}
}

/// Host-derived inputs for one tick, passed in rather than read globally.
#[derive(Clone, Copy, Debug)]
pub struct TickInput<'a> {
	/// Current bounce area.
	pub viewport: Viewport,
	/// Threshold of the current density tier.
	pub connection_distance: f64,
	/// When set, the tick changes nothing.
	pub reduced_motion: bool,
	/// Tunables.
	pub config: &'a NetworkConfig,
}

/// Everything that changes between animation frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationState {
	/// The moving points.
	pub nodes: Vec<Node>,
	/// Graph from the last recomputation, possibly a few ticks old.
	pub connections: Vec<Connection>,
	/// Simulated seconds since the field was generated.
	pub time: f64,
	/// Ticks since the field was generated.
	pub frame: u64,
}

impl SimulationState {
	/// Fresh state for a newly generated field, with its connections.
	pub fn new(nodes: Vec<Node>, connection_distance: f64, config: &NetworkConfig) -> Self {
		let connections = compute_connections(&nodes, connection_distance, config.connection_opacity);
		Self {
			nodes,
			connections,
			time: 0.0,
			frame: 0,
		}
	}

	/// The state one tick later.
	///
	/// With reduced motion, an undrawable viewport, or no nodes, the result
	/// equals `self`.
	pub fn advance<R: Rng + ?Sized>(&self, input: &TickInput<'_>, rng: &mut R) -> Self {
		if input.reduced_motion || !input.viewport.is_renderable() || self.nodes.is_empty() {
			return self.clone();
		}
		let config = input.config;
		let frame = self.frame + 1;
		let jitter = Throttle::every(config.perturbation_interval).is_due(frame);
		let bounds = Bounds::new(input.viewport, config.edge_padding);
		let cap = config.max_velocity.abs();

		let nodes: Vec<Node> = self
			.nodes
			.iter()
			.map(|node| {
				let mut next = node.clone();
				(next.x, next.vx) = bounds.x.bounce(node.x + node.vx, node.vx);
				(next.y, next.vy) = bounds.y.bounce(node.y + node.vy, node.vy);
				if jitter {
					let m = config.perturbation_magnitude;
					next.vx += m * (rng.r#gen::<f64>() * 2.0 - 1.0);
					next.vy += m * (rng.r#gen::<f64>() * 2.0 - 1.0);
				}
				next.vx = next.vx.clamp(-cap, cap);
				next.vy = next.vy.clamp(-cap, cap);
				next
			})
			.collect();

		let connections = if Throttle::every(config.connection_interval).is_due(frame) {
			compute_connections(&nodes, input.connection_distance, config.connection_opacity)
		} else {
			self.connections.clone()
		};

		Self {
			nodes,
			connections,
			time: self.time + config.tick_seconds,
			frame,
		}
	}
}

/// Closed interval a coordinate bounces inside.
#[derive(Clone, Copy, Debug)]
struct Span {
	lo: f64,
	hi: f64,
}

impl Span {
	/// Axes narrower than twice the padding collapse onto their midline.
	fn new(extent: f64, padding: f64) -> Self {
		let padding = padding.max(0.0).min(extent / 2.0);
		Self {
			lo: padding,
			hi: extent - padding,
		}
	}

	fn bounce(&self, position: f64, velocity: f64) -> (f64, f64) {
		if position < self.lo || position > self.hi {
			(position.clamp(self.lo, self.hi), -velocity)
		} else {
			(position, velocity)
		}
	}
}

#[derive(Clone, Copy, Debug)]
struct Bounds {
	x: Span,
	y: Span,
}

impl Bounds {
	fn new(viewport: Viewport, padding: f64) -> Self {
		Self {
			x: Span::new(viewport.width, padding),
			y: Span::new(viewport.height, padding),
		}
	}
}

/// All pairs closer than `max_distance`, each emitted once with `source < target`.
pub fn compute_connections(nodes: &[Node], max_distance: f64, max_opacity: f64) -> Vec<Connection> {
	let mut connections = Vec::new();
	if max_distance <= 0.0 {
		return connections;
	}
	for (i, a) in nodes.iter().enumerate() {
		for b in &nodes[i + 1..] {
			let distance = (a.x - b.x).hypot(a.y - b.y);
			if distance < max_distance {
				connections.push(Connection {
					source: a.id,
					target: b.id,
					x1: a.x,
					y1: a.y,
					x2: b.x,
					y2: b.y,
					opacity: connection_opacity(distance, max_distance, max_opacity),
					variant: a.variant.mix(b.variant),
				});
			}
		}
	}
	connections
}

/// Linear falloff from `max_opacity` at zero distance to nothing at the threshold.
pub fn connection_opacity(distance: f64, max_distance: f64, max_opacity: f64) -> f64 {
	(1.0 - distance / max_distance).max(0.0) * max_opacity
}
