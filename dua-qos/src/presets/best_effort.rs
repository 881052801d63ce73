//! Best-effort counterparts of the [`reliable`](super::reliable) presets, for
//! high-rate streams where a dropped sample is preferable to a stalled
//! publisher.

use crate::catalog::{Category, Family};
use crate::qos::{QosConfiguration, QosDurability, QosReliability};

pub const DEFAULT_SCAN_DEPTH: usize = 5;
pub const DEFAULT_IMAGE_DEPTH: usize = 1;

/// Returns the QoS profile for regular data topics.
///
/// Unbounded like its reliable counterpart; `depth` is ignored.
pub fn get_datum_qos(_depth: Option<usize>) -> QosConfiguration {
    super::keep_all(
        Family::BestEffort,
        Category::Datum,
        QosReliability::BestEffort,
        QosDurability::Volatile,
    )
}

/// Returns the QoS profile for scan topics, like pointclouds or laser scans.
pub fn get_scan_qos(depth: Option<usize>) -> QosConfiguration {
    super::keep_last(
        Family::BestEffort,
        Category::Scan,
        depth,
        DEFAULT_SCAN_DEPTH,
        QosReliability::BestEffort,
        QosDurability::Volatile,
    )
}

/// Returns the QoS profile for image topics.
pub fn get_image_qos(depth: Option<usize>) -> QosConfiguration {
    super::keep_last(
        Family::BestEffort,
        Category::Image,
        depth,
        DEFAULT_IMAGE_DEPTH,
        QosReliability::BestEffort,
        QosDurability::Volatile,
    )
}
