//! Integration module connecting detection backends and output sinks to the
//! zone monitor.
//!
//! This module provides the traits and utilities sitting at the crate's
//! seams: the [`DetectionSource`] trait for inference backends, the event
//! log writer producing the line-oriented wire format, and the end-to-end
//! [`MonitorPipeline`].

mod builder;
mod detector;
mod event_log;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use event_log::EventLog;
pub use pipeline::MonitorPipeline;
