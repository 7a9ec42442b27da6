//! HTTP Routes

pub mod metar;
pub mod report;
pub mod risk;
