pub mod chart;
pub mod overlay;
