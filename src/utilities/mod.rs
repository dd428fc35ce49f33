//! Global utility styles.

pub mod reboot;

pub use reboot::{global_styles, BodyStyle};
