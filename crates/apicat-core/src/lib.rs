//! Spec evolution timelines and catalogue filtering.

pub mod evolution;
pub mod timeline;
pub mod topics;

pub use evolution::{BranchTimeline, InterfaceTimeline, preview_spec, selected_item};
pub use timeline::{Category, Timeline, TimelineEntry, branch_head_index, classify_branch};
pub use topics::{available_topics, filter_catalogues, is_visible};
