//! Reusable UI components

mod listing_card;
mod loading;
pub mod radar_chart;

pub use listing_card::*;
pub use loading::*;
pub use radar_chart::{RadarChart, RadarPoint};
