//! Chart widgets over the static dashboard series

pub mod acquisition;
pub mod revenue;
pub mod traffic;

pub use acquisition::render_acquisition_chart;
pub use revenue::render_revenue_chart;
pub use traffic::render_traffic_chart;
