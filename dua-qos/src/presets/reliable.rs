//! Reliable, volatile presets.

use crate::catalog::{Category, Family};
use crate::qos::{QosConfiguration, QosDurability, QosReliability};

pub const DEFAULT_SCAN_DEPTH: usize = 5;
pub const DEFAULT_IMAGE_DEPTH: usize = 1;

/// Returns the QoS profile for regular data topics.
///
/// The queue is unbounded, so `depth` is accepted only for symmetry with the
/// other families and is ignored.
pub fn get_datum_qos(_depth: Option<usize>) -> QosConfiguration {
    super::keep_all(
        Family::Reliable,
        Category::Datum,
        QosReliability::Reliable,
        QosDurability::Volatile,
    )
}

/// Returns the QoS profile for scan topics, like pointclouds or laser scans.
pub fn get_scan_qos(depth: Option<usize>) -> QosConfiguration {
    super::keep_last(
        Family::Reliable,
        Category::Scan,
        depth,
        DEFAULT_SCAN_DEPTH,
        QosReliability::Reliable,
        QosDurability::Volatile,
    )
}

/// Returns the QoS profile for image topics.
pub fn get_image_qos(depth: Option<usize>) -> QosConfiguration {
    super::keep_last(
        Family::Reliable,
        Category::Image,
        depth,
        DEFAULT_IMAGE_DEPTH,
        QosReliability::Reliable,
        QosDurability::Volatile,
    )
}
