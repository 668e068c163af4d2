mod component;
mod detail;
mod legend;
mod render;
mod state;
mod types;

pub use component::NetworkVisualization;
pub use state::NetworkState;
