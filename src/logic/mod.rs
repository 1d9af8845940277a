//! Pure classification and orchestration-free logic.

pub mod availability;
pub mod ceremony;
