//! Per-frame zone monitoring orchestration.

use tracing::{debug, trace};

use crate::monitor::classifier::classify;
use crate::monitor::detection::Detection;
use crate::monitor::event::ZoneEvent;
use crate::monitor::identity::{IdentityAssigner, RankAssigner};
use crate::monitor::occupancy::OccupancyFrame;
use crate::monitor::table::TrackTable;
use crate::monitor::zone::ZoneSet;

/// Configuration for the zone monitor.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Minimum detection confidence considered at all
    pub score_threshold: f32,
    /// Category label to monitor; compared case-insensitively
    pub category: String,
    /// Seconds without an in-zone observation before a track is evicted
    pub timeout: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.5,
            category: "person".to_string(),
            timeout: 2.0,
        }
    }
}

/// Everything the engine derived from one frame, handed to the caller for
/// logging and rendering.
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Events in order: observation events by detection order, then
    /// eviction events
    pub events: Vec<ZoneEvent>,
    pub occupancy: OccupancyFrame,
}

/// The zone monitoring engine.
///
/// Owns the zone set and the track table; processes one frame at a time,
/// synchronously. Per frame: filter detections to the monitored category,
/// assign object ids, classify each anchor point to a zone, update track
/// state (deriving entry/exit events), evict stale tracks, and tally
/// occupancy.
pub struct ZoneMonitor {
    zones: ZoneSet,
    table: TrackTable,
    config: MonitorConfig,
    assigner: Box<dyn IdentityAssigner>,
    frame_id: u64,
}

impl ZoneMonitor {
    /// Monitor with the default per-frame rank identity.
    pub fn new(zones: ZoneSet, config: MonitorConfig) -> Self {
        Self::with_assigner(zones, config, Box::new(RankAssigner))
    }

    /// Monitor with a custom identity strategy, e.g.
    /// [`IouAssigner`](crate::monitor::IouAssigner) for ids that persist
    /// across frames.
    pub fn with_assigner(
        zones: ZoneSet,
        config: MonitorConfig,
        assigner: Box<dyn IdentityAssigner>,
    ) -> Self {
        Self {
            zones,
            table: TrackTable::new(),
            config,
            assigner,
            frame_id: 0,
        }
    }

    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    pub fn zones_mut(&mut self) -> &mut ZoneSet {
        &mut self.zones
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Number of currently live tracks.
    pub fn tracked_count(&self) -> usize {
        self.table.len()
    }

    fn is_monitored(&self, detection: &Detection) -> bool {
        detection.score >= self.config.score_threshold
            && detection.category.eq_ignore_ascii_case(&self.config.category)
    }

    /// Process one frame of detections at time `now` (seconds).
    ///
    /// Detections of other categories or below the score threshold are
    /// ignored. Frames must be submitted one at a time, in arrival order,
    /// with non-decreasing `now`.
    pub fn process_frame(&mut self, detections: &[Detection], now: f64) -> FrameReport {
        self.frame_id += 1;

        let persons: Vec<Detection> = detections
            .iter()
            .filter(|d| self.is_monitored(d))
            .cloned()
            .collect();
        let ids = self.assigner.assign(&persons);

        let mut report = FrameReport::default();
        for (object_id, detection) in ids.iter().zip(&persons) {
            let anchor = detection.bbox.anchor();
            let zone = classify(anchor, &self.zones);
            trace!(
                frame = self.frame_id,
                object_id = %object_id,
                anchor_x = anchor.x,
                anchor_y = anchor.y,
                zone = zone.unwrap_or("-"),
                "classified detection"
            );

            if let Some(zone_id) = zone {
                report.occupancy.record(zone_id, object_id);
            }
            report
                .events
                .extend(self.table.observe(object_id, &detection.category, zone, now));
        }

        report.events.extend(self.table.evict_stale(now, self.config.timeout));

        debug!(
            frame = self.frame_id,
            persons = persons.len(),
            events = report.events.len(),
            tracked = self.table.len(),
            "frame processed"
        );
        report
    }
}
