//! Object identity assignment for person detections.
//!
//! The engine needs an id per detection to key the track table. Two
//! strategies are provided:
//!
//! - [`RankAssigner`] (default): ids by detection rank within the frame
//!   (`person_1`, `person_2`, ...). This reproduces the original monitor's
//!   behavior exactly. It is NOT re-identification: a person who drops out
//!   of the detector output and reappears, or whose rank shifts because
//!   another person appeared before them, gets a different id. The stale id
//!   lingers in the track table until it times out.
//! - [`IouAssigner`]: greedy frame-to-frame association by bounding-box IoU
//!   with optimal assignment, giving ids that survive as long as the object
//!   stays detected. The documented upgrade path; changes observable event
//!   sequences, so it is opt-in.

use lapjv::lapjv;
use ndarray::Array2;

use crate::monitor::detection::Detection;
use crate::monitor::rect::{Rect, iou_distance};

/// Assigns an id to each detection of a frame.
///
/// Returned ids are parallel to the input slice. Implementations may keep
/// cross-frame state.
pub trait IdentityAssigner {
    fn assign(&mut self, detections: &[Detection]) -> Vec<String>;
}

/// Per-frame rank identity: the Nth person detection of a frame is
/// `person_N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankAssigner;

impl IdentityAssigner for RankAssigner {
    fn assign(&mut self, detections: &[Detection]) -> Vec<String> {
        (1..=detections.len()).map(|n| format!("person_{n}")).collect()
    }
}

/// IoU-based identity: matches this frame's boxes against the previous
/// frame's, keeping the matched id; unmatched detections get a fresh id
/// from a monotonic counter.
#[derive(Debug)]
pub struct IouAssigner {
    previous: Vec<(String, Rect)>,
    next_id: u64,
    /// Maximum IoU distance (1 - IoU) accepted as the same object.
    pub match_thresh: f32,
}

impl Default for IouAssigner {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl IouAssigner {
    pub fn new(match_thresh: f32) -> Self {
        Self {
            previous: Vec::new(),
            next_id: 0,
            match_thresh,
        }
    }

    fn fresh_id(&mut self) -> String {
        self.next_id += 1;
        format!("person_{}", self.next_id)
    }
}

impl IdentityAssigner for IouAssigner {
    fn assign(&mut self, detections: &[Detection]) -> Vec<String> {
        let det_boxes: Vec<Rect> = detections.iter().map(|d| d.bbox).collect();
        let prev_boxes: Vec<Rect> = self.previous.iter().map(|(_, r)| *r).collect();

        let mut ids: Vec<Option<String>> = vec![None; detections.len()];
        if !prev_boxes.is_empty() && !det_boxes.is_empty() {
            let dists = iou_distance(&prev_boxes, &det_boxes);
            for (prev_idx, det_idx) in solve_assignment(&dists, self.match_thresh) {
                ids[det_idx] = Some(self.previous[prev_idx].0.clone());
            }
        }

        let ids: Vec<String> = ids
            .into_iter()
            .map(|id| id.unwrap_or_else(|| self.fresh_id()))
            .collect();

        self.previous = ids
            .iter()
            .cloned()
            .zip(det_boxes)
            .collect();
        ids
    }
}

/// Solve the square-padded linear assignment problem over a cost matrix,
/// keeping only pairs under `thresh`.
fn solve_assignment(cost_matrix: &Array2<f32>, thresh: f32) -> Vec<(usize, usize)> {
    let (num_rows, num_cols) = cost_matrix.dim();
    if num_rows == 0 || num_cols == 0 {
        return vec![];
    }

    let size = num_rows.max(num_cols);
    let mut padded = Array2::<f64>::from_elem((size, size), 1e6);
    for i in 0..num_rows {
        for j in 0..num_cols {
            padded[[i, j]] = cost_matrix[[i, j]] as f64;
        }
    }

    let mut matches = vec![];
    if let Ok((row_to_col, _)) = lapjv(&padded) {
        for (row_idx, &col_idx) in row_to_col.iter().enumerate() {
            if row_idx >= num_rows || col_idx >= num_cols {
                continue;
            }
            if cost_matrix[[row_idx, col_idx]] <= thresh {
                matches.push((row_idx, col_idx));
            }
        }
    }
    matches
}
