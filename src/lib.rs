//! Polygonal zone occupancy monitoring for per-frame person detections.
//!
//! `zonewatch-rs` takes the detections an object detector produced for a
//! single video frame and works out which user-defined polygonal zone each
//! detected person stands in, emitting entry/exit/timeout events and
//! per-zone occupancy counts as it goes.
//!
//! The crate is split into two halves:
//! - [`monitor`] — the zone engine itself: zone storage, the point-in-polygon
//!   classifier, the per-object track table with timeout eviction, and the
//!   per-frame [`ZoneMonitor`] orchestrator.
//! - [`integration`] — the seams to the outside world: the
//!   [`DetectionSource`] trait for inference backends, the event log writer,
//!   and the end-to-end [`MonitorPipeline`].

pub mod integration;
pub mod monitor;

pub use integration::{DetectionSource, EventLog, MonitorPipeline};
pub use monitor::{
    Detection, EventKind, FrameReport, MonitorConfig, OccupancyFrame, Point, Rect, Zone,
    ZoneError, ZoneEvent, ZoneMonitor, ZoneSet,
};
