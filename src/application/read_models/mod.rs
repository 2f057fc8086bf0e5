//! Display models assembled from the backend payloads
pub mod detection_view;
pub mod group_view;

pub use detection_view::DetectionView;
pub use group_view::{DisplayGroupSection, GroupOption};
