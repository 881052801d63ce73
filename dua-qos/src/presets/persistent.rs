//! Durable, reliable presets: late joiners receive the last samples that were
//! published before they attached.

use crate::catalog::{Category, Family};
use crate::qos::{QosConfiguration, QosDurability, QosReliability};

pub const DEFAULT_DATUM_DEPTH: usize = 20;

/// Returns the QoS profile for regular data topics.
pub fn get_datum_qos(depth: Option<usize>) -> QosConfiguration {
    super::keep_last(
        Family::Persistent,
        Category::Datum,
        depth,
        DEFAULT_DATUM_DEPTH,
        QosReliability::Reliable,
        QosDurability::TransientLocal,
    )
}
