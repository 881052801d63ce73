use tracing::debug;
use ::zenoh::qos::CongestionControl;

use super::QosBinding;
use crate::qos::{QosConfiguration, QosDurability, QosHistory, QosReliability};

/// Publisher and subscriber settings for a plain Zenoh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZenohQos {
    pub congestion_control: CongestionControl,
    pub express: bool,
    /// Capacity of the subscriber-side sample queue
    pub queue_size: usize,
}

/// Maps reliability onto congestion control (block vs drop), transient local
/// onto express publication, and history onto the subscriber queue bound.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZenohBinding;

impl QosBinding for ZenohBinding {
    type Native = ZenohQos;

    fn translate(&self, qos: &QosConfiguration) -> ZenohQos {
        let congestion_control = match qos.reliability {
            QosReliability::Reliable => CongestionControl::Block,
            QosReliability::BestEffort => CongestionControl::Drop,
        };
        let express = match qos.durability {
            QosDurability::TransientLocal => true,
            QosDurability::Volatile => false,
        };
        let queue_size = match qos.history {
            QosHistory::KeepLast => qos.depth,
            QosHistory::KeepAll => usize::MAX,
        };
        debug!(
            ?congestion_control,
            express, queue_size, "Mapped {} to Zenoh settings", qos
        );

        ZenohQos {
            congestion_control,
            express,
            queue_size,
        }
    }
}
