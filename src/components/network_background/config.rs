//! Tunables for the network background.
//!
//! Everything the simulation and the renderer read lives in
//! [`NetworkConfig`]; the responsive density policy is the [`DensityTier`]
//! table rather than branching on widths.

use std::ops::Range;

use super::types::ColorVariant;

/// One row of the responsive density table.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityTier {
	/// Short name used in logs.
	pub name: &'static str,
	/// Exclusive upper bound on viewport width; `None` for the last tier.
	pub max_width: Option<f64>,
	/// Number of nodes generated for this tier.
	pub node_count: usize,
	/// Pixel distance below which two nodes are connected.
	pub connection_distance: f64,
}

impl DensityTier {
	fn contains(&self, width: f64) -> bool {
		self.max_width.is_none_or(|max| width < max)
	}
}

/// Breathing effect applied to every node while motion is allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct PulseConfig {
	/// Angular frequency of the size pulse, per simulated second.
	pub radius_frequency: f64,
	/// Relative size swing around 1.
	pub radius_amplitude: f64,
	/// Mean of the opacity multiplier.
	pub opacity_base: f64,
	/// Angular frequency of the opacity pulse, per simulated second.
	pub opacity_frequency: f64,
	/// Swing of the opacity multiplier around its base.
	pub opacity_amplitude: f64,
}

impl Default for PulseConfig {
	fn default() -> Self {
		Self {
			radius_frequency: 2.0,
			radius_amplitude: 0.25,
			opacity_base: 0.85,
			opacity_frequency: 1.5,
			opacity_amplitude: 0.15,
		}
	}
}

/// RGB triples for the two colour variants.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	/// Blue.
	pub primary: (u8, u8, u8),
	/// Green.
	pub accent: (u8, u8, u8),
}

impl Palette {
	/// Colour for a variant.
	pub fn rgb(&self, variant: ColorVariant) -> (u8, u8, u8) {
		match variant {
			ColorVariant::Primary => self.primary,
			ColorVariant::Accent => self.accent,
		}
	}

	/// CSS `rgba()` string for a variant at the given alpha.
	pub fn rgba(&self, variant: ColorVariant, alpha: f64) -> String {
		let (r, g, b) = self.rgb(variant);
		format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			primary: (12, 36, 233),
			accent: (45, 122, 94),
		}
	}
}

/// Complete configuration for one `NetworkBackground`.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
	/// Density table, ordered by ascending `max_width`.
	pub tiers: Vec<DensityTier>,
	/// Inset of the bounce boundary from every viewport edge.
	pub edge_padding: f64,
	/// Per-axis speed cap, in pixels per tick.
	pub max_velocity: f64,
	/// Per-axis bound of the velocity a node is created with.
	pub initial_velocity: f64,
	/// Range the core radius is drawn from.
	pub radius_range: Range<f64>,
	/// Range the base opacity is drawn from.
	pub opacity_range: Range<f64>,
	/// Jitter is applied on ticks that are a multiple of this.
	pub perturbation_interval: u64,
	/// Per-axis bound of the velocity jitter.
	pub perturbation_magnitude: f64,
	/// Connections are recomputed on ticks that are a multiple of this.
	pub connection_interval: u64,
	/// Opacity of a connection between coincident nodes.
	pub connection_opacity: f64,
	/// Share of nodes drawn in the accent colour.
	pub accent_fraction: f64,
	/// Simulated seconds per tick.
	pub tick_seconds: f64,
	/// Quiet period before a resize is applied.
	pub resize_debounce_ms: u32,
	/// Breathing effect.
	pub pulse: PulseConfig,
	/// Halo radius as a multiple of the core radius.
	pub halo_scale: f64,
	/// Halo opacity as a fraction of the core opacity.
	pub halo_opacity: f64,
	/// Colours.
	pub palette: Palette,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			tiers: default_tiers(),
			edge_padding: 50.0,
			max_velocity: 0.35,
			initial_velocity: 0.15,
			radius_range: 3.0..7.0,
			opacity_range: 0.2..0.5,
			perturbation_interval: 10,
			perturbation_magnitude: 0.015,
			connection_interval: 3,
			connection_opacity: 0.25,
			accent_fraction: 0.3,
			tick_seconds: 0.016,
			resize_debounce_ms: 100,
			pulse: PulseConfig::default(),
			halo_scale: 3.0,
			halo_opacity: 0.25,
			palette: Palette::default(),
		}
	}
}

/// The stock four-tier table.
pub fn default_tiers() -> Vec<DensityTier> {
	vec![
		DensityTier {
			name: "narrow",
			max_width: Some(480.0),
			node_count: 15,
			connection_distance: 100.0,
		},
		DensityTier {
			name: "medium",
			max_width: Some(1024.0),
			node_count: 25,
			connection_distance: 100.0,
		},
		DensityTier {
			name: "large",
			max_width: Some(1440.0),
			node_count: 35,
			connection_distance: 140.0,
		},
		DensityTier {
			name: "wide",
			max_width: None,
			node_count: 45,
			connection_distance: 140.0,
		},
	]
}

impl NetworkConfig {
	/// First tier whose bound admits `width`, falling back to the last row.
	pub fn tier_for_width(&self, width: f64) -> Option<&DensityTier> {
		self.tiers
			.iter()
			.find(|tier| tier.contains(width))
			.or_else(|| self.tiers.last())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn narrow_viewport_picks_first_tier() {
		let config = NetworkConfig::default();
		let tier = config.tier_for_width(400.0).unwrap();
		assert_eq!(tier.name, "narrow");
		assert_eq!(tier.node_count, 15);
		assert_eq!(tier.connection_distance, 100.0);
	}

	#[test]
	fn wide_viewport_picks_last_tier() {
		let config = NetworkConfig::default();
		let tier = config.tier_for_width(1920.0).unwrap();
		assert_eq!(tier.name, "wide");
		assert_eq!(tier.node_count, 45);
		assert_eq!(tier.connection_distance, 140.0);
	}

	#[test]
	fn bounds_are_exclusive() {
		let config = NetworkConfig::default();
		assert_eq!(config.tier_for_width(479.9).unwrap().name, "narrow");
		assert_eq!(config.tier_for_width(480.0).unwrap().name, "medium");
		assert_eq!(config.tier_for_width(800.0).unwrap().node_count, 25);
		assert_eq!(config.tier_for_width(1024.0).unwrap().name, "large");
		assert_eq!(config.tier_for_width(1440.0).unwrap().name, "wide");
	}

	#[test]
	fn table_without_open_row_falls_back_to_last() {
		let config = NetworkConfig {
			tiers: vec![DensityTier {
				name: "only",
				max_width: Some(100.0),
				node_count: 3,
				connection_distance: 10.0,
			}],
			..NetworkConfig::default()
		};
		assert_eq!(config.tier_for_width(5000.0).unwrap().name, "only");
	}

	#[test]
	fn empty_table_has_no_tier() {
		let config = NetworkConfig {
			tiers: Vec::new(),
			..NetworkConfig::default()
		};
		assert!(config.tier_for_width(800.0).is_none());
	}

	#[test]
	fn rgba_clamps_alpha() {
		let palette = Palette::default();
		assert_eq!(
			palette.rgba(ColorVariant::Accent, 1.5),
			"rgba(45, 122, 94, 1)"
		);
		assert_eq!(
			palette.rgba(ColorVariant::Primary, 0.5),
			"rgba(12, 36, 233, 0.5)"
		);
	}
}
