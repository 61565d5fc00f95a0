mod summary;
pub mod views;

pub use summary::REPORT_TITLE;
pub use views::{CritiqueReport, FindingView, TierPresentation};
