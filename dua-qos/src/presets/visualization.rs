//! Presets for topics consumed by visualization tools: best-effort, volatile
//! and shallow, so a slow viewer never backs up the producer.

use crate::catalog::{Category, Family};
use crate::qos::{QosConfiguration, QosDurability, QosReliability};

pub const DEFAULT_DATUM_DEPTH: usize = 5;
pub const DEFAULT_COMMAND_DEPTH: usize = 5;
pub const DEFAULT_SCAN_DEPTH: usize = 1;
pub const DEFAULT_IMAGE_DEPTH: usize = 1;
pub const DEFAULT_MARKER_DEPTH: usize = 1;

fn preset(category: Category, depth: Option<usize>, default_depth: usize) -> QosConfiguration {
    super::keep_last(
        Family::Visualization,
        category,
        depth,
        default_depth,
        QosReliability::BestEffort,
        QosDurability::Volatile,
    )
}

/// Returns the QoS profile for regular data topics.
pub fn get_datum_qos(depth: Option<usize>) -> QosConfiguration {
    preset(Category::Datum, depth, DEFAULT_DATUM_DEPTH)
}

/// Returns the QoS profile for command topics.
pub fn get_command_qos(depth: Option<usize>) -> QosConfiguration {
    preset(Category::Command, depth, DEFAULT_COMMAND_DEPTH)
}

/// Returns the QoS profile for scan topics, like pointclouds or laser scans.
pub fn get_scan_qos(depth: Option<usize>) -> QosConfiguration {
    preset(Category::Scan, depth, DEFAULT_SCAN_DEPTH)
}

/// Returns the QoS profile for image topics.
pub fn get_image_qos(depth: Option<usize>) -> QosConfiguration {
    preset(Category::Image, depth, DEFAULT_IMAGE_DEPTH)
}

/// Returns the QoS profile for marker topics.
pub fn get_marker_qos(depth: Option<usize>) -> QosConfiguration {
    preset(Category::Marker, depth, DEFAULT_MARKER_DEPTH)
}
