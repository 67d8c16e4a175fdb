mod classifier;
mod clock;
mod detection;
mod engine;
mod error;
mod event;
mod identity;
mod occupancy;
mod rect;
mod store;
mod table;
mod track;
mod zone;

pub use classifier::{classify, point_in_polygon};
pub use clock::{Clock, ManualClock, SystemClock};
pub use detection::Detection;
pub use engine::{FrameReport, MonitorConfig, ZoneMonitor};
pub use error::ZoneError;
pub use event::{EventKind, ZoneEvent};
pub use identity::{IdentityAssigner, IouAssigner, RankAssigner};
pub use occupancy::OccupancyFrame;
pub use rect::Rect;
pub use store::{ColorAllocation, PALETTE};
pub use table::TrackTable;
pub use track::Track;
pub use zone::{Color, Point, Zone, ZoneSet};
