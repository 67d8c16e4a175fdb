//! MonitorPipeline for combining detection with zone monitoring.

use crate::monitor::{Clock, FrameReport, MonitorConfig, SystemClock, ZoneMonitor, ZoneSet};

use super::DetectionSource;

/// End-to-end pipeline bundling a detection backend, the zone monitor and a
/// time source.
///
/// Frames are processed strictly one at a time: a frame is fully detected,
/// classified, tracked and evicted before the next is submitted. That
/// single-writer discipline is what keeps event ordering deterministic.
pub struct MonitorPipeline<D: DetectionSource, C: Clock = SystemClock> {
    detector: D,
    monitor: ZoneMonitor,
    clock: C,
}

impl<D: DetectionSource> MonitorPipeline<D, SystemClock> {
    /// Pipeline over the wall clock.
    pub fn new(detector: D, zones: ZoneSet, config: MonitorConfig) -> Self {
        Self::with_clock(detector, ZoneMonitor::new(zones, config), SystemClock)
    }
}

impl<D: DetectionSource, C: Clock> MonitorPipeline<D, C> {
    /// Pipeline with an explicit monitor and time source; used for
    /// simulated-time runs and tests.
    pub fn with_clock(detector: D, monitor: ZoneMonitor, clock: C) -> Self {
        Self {
            detector,
            monitor,
            clock,
        }
    }

    /// Process a single frame end to end.
    ///
    /// Runs detection on the input image, then feeds the detections to the
    /// monitor at the clock's current time. Detector failures surface
    /// unchanged; the monitor itself cannot fail.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<FrameReport, D::Error> {
        let detections = self.detector.detect(input, width, height)?;
        Ok(self.monitor.process_frame(&detections, self.clock.now()))
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying monitor.
    pub fn monitor(&self) -> &ZoneMonitor {
        &self.monitor
    }

    /// Get a mutable reference to the underlying monitor.
    pub fn monitor_mut(&mut self) -> &mut ZoneMonitor {
        &mut self.monitor
    }
}
