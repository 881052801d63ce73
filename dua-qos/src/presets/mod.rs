//! QoS preset families.
//!
//! Each family lives in its own module and exposes one constructor per data
//! category. The same category name appears in several families on purpose:
//! callers pick the semantics by naming the family at the call site, e.g.
//! `reliable::get_scan_qos(None)` versus `visualization::get_scan_qos(None)`.

pub mod best_effort;
pub mod persistent;
pub mod reliable;
pub mod visualization;

use tracing::{trace, warn};

use crate::catalog::{Category, Family};
use crate::qos::{DEFAULT_HISTORY_DEPTH, QosConfiguration, QosDurability, QosReliability};

/// Builds a bounded preset, substituting the caller's depth when given.
fn keep_last(
    family: Family,
    category: Category,
    depth: Option<usize>,
    default_depth: usize,
    reliability: QosReliability,
    durability: QosDurability,
) -> QosConfiguration {
    let depth = depth.unwrap_or(default_depth);
    if depth == 0 {
        warn!(%family, %category, "zero queue depth requested, forwarding as-is");
    }
    trace!(%family, %category, depth, "building keep-last preset");

    let qos = QosConfiguration::DEFAULT.keep_last(depth);
    with_policies(qos, reliability, durability)
}

/// Builds an unbounded preset. The depth field is irrelevant under
/// `KeepAll` and is pinned to the rmw default.
fn keep_all(
    family: Family,
    category: Category,
    reliability: QosReliability,
    durability: QosDurability,
) -> QosConfiguration {
    trace!(%family, %category, "building keep-all preset");

    let qos = QosConfiguration::DEFAULT
        .keep_last(DEFAULT_HISTORY_DEPTH)
        .keep_all();
    with_policies(qos, reliability, durability)
}

fn with_policies(
    qos: QosConfiguration,
    reliability: QosReliability,
    durability: QosDurability,
) -> QosConfiguration {
    let qos = match reliability {
        QosReliability::Reliable => qos.reliable(),
        QosReliability::BestEffort => qos.best_effort(),
    };
    match durability {
        QosDurability::Volatile => qos.durability_volatile(),
        QosDurability::TransientLocal => qos.transient_local(),
    }
}
