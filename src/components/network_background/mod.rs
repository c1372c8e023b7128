mod component;
pub mod config;
mod environment;
mod field;
mod paint;
mod renderer;
mod scene;
mod simulation;
mod types;

pub use component::NetworkBackground;
pub use config::{DensityTier, NetworkConfig, Palette, PulseConfig};
pub use field::generate_nodes;
pub use renderer::NetworkRenderer;
pub use scene::{Circle, Line, Pulse, Scene, build_scene};
pub use simulation::{SimulationState, Throttle, TickInput, compute_connections, connection_opacity};
pub use types::{ColorVariant, Connection, Node, Viewport};
