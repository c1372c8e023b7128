/// Which of the two palette themes a node or connection is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorVariant {
	/// Majority colour (blue).
	#[default]
	Primary,
	/// Minority colour (green).
	Accent,
}

impl ColorVariant {
	/// An edge is accented as soon as one of its endpoints is.
	pub fn mix(self, other: ColorVariant) -> ColorVariant {
		if self == ColorVariant::Accent || other == ColorVariant::Accent {
			ColorVariant::Accent
		} else {
			ColorVariant::Primary
		}
	}
}

/// One moving point of the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Stable index within the generated field.
	pub id: usize,
	/// Horizontal position in viewport pixels.
	pub x: f64,
	/// Vertical position in viewport pixels.
	pub y: f64,
	/// Horizontal velocity in pixels per tick.
	pub vx: f64,
	/// Vertical velocity in pixels per tick.
	pub vy: f64,
	/// Core radius before pulsing.
	pub size: f64,
	/// Base opacity before pulsing.
	pub opacity: f64,
	/// Pulse phase in radians, fixed at creation.
	pub phase: f64,
	/// Palette theme.
	pub variant: ColorVariant,
}

/// A line between two nodes closer than the connection threshold.
///
/// Endpoint positions are copied at computation time, so a connection
/// keeps describing the node set it was computed from.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	/// Id of the lower-indexed endpoint.
	pub source: usize,
	/// Id of the higher-indexed endpoint.
	pub target: usize,
	/// Source x at computation time.
	pub x1: f64,
	/// Source y at computation time.
	pub y1: f64,
	/// Target x at computation time.
	pub x2: f64,
	/// Target y at computation time.
	pub y2: f64,
	/// Line opacity, `0.0` at the threshold.
	pub opacity: f64,
	/// Palette theme derived from both endpoints.
	pub variant: ColorVariant,
}

/// Size of the host viewport in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Width in CSS pixels.
	pub width: f64,
	/// Height in CSS pixels.
	pub height: f64,
}

impl Viewport {
	/// Build a viewport from a width and a height.
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Whether anything can be simulated or drawn at this size.
	pub fn is_renderable(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}
}
