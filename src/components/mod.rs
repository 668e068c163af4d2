//! Dashboard components.

pub mod canvas;
pub mod network_viz;
pub mod realtime_chart;
pub mod system_health;
pub mod traffic_metrics;
