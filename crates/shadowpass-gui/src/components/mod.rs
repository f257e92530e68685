pub mod activity_pane;
pub mod common;
pub mod strength_meter;
