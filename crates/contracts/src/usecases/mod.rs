pub mod common;
pub mod u101_lung_scan_analysis;
