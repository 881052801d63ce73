use std::fmt;

use tracing::debug;

use super::QosBinding;
use crate::qos::{QosConfiguration, QosDurability, QosHistory, QosReliability};

const QOS_DELIMITER: &str = ":";
const QOS_COMPONENT_DELIMITER: &str = ",";

/// Encodes profiles the way `rmw_zenoh` writes them into liveliness tokens:
///
/// `<reliability>:<durability>:<history>,<depth>:<deadline>:<lifespan>:<liveliness>`
///
/// Policies equal to the rmw default profile are left empty. Deadline,
/// lifespan and liveliness are not part of a [`QosConfiguration`] and are
/// always written as defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct RmwZenohBinding;

impl QosBinding for RmwZenohBinding {
    type Native = String;

    fn translate(&self, qos: &QosConfiguration) -> String {
        let default_qos = QosConfiguration::DEFAULT;

        let reliability = if qos.reliability != default_qos.reliability {
            match qos.reliability {
                QosReliability::Reliable => "1",
                QosReliability::BestEffort => "2",
            }
        } else {
            ""
        };

        let durability = if qos.durability != default_qos.durability {
            match qos.durability {
                QosDurability::TransientLocal => "1",
                QosDurability::Volatile => "2",
            }
        } else {
            ""
        };

        // Depth is always written, the kind only when non-default
        let history_kind = if qos.history != default_qos.history {
            match qos.history {
                QosHistory::KeepLast => "1",
                QosHistory::KeepAll => "2",
            }
        } else {
            ""
        };

        let token = format!(
            "{reliability}{d}{durability}{d}{history_kind}{c}{depth}{d}{c}{d}{c}{d}{c}{c}",
            depth = qos.depth,
            d = QOS_DELIMITER,
            c = QOS_COMPONENT_DELIMITER,
        );
        debug!(%qos, %token, "Encoded rmw_zenoh QoS");
        token
    }
}

/// Errors from [`RmwZenohBinding::decode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QosDecodeError {
    IncompleteQos,
    InvalidReliability,
    InvalidDurability,
    InvalidHistory,
}

impl fmt::Display for QosDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteQos => write!(f, "QoS string is missing fields"),
            Self::InvalidReliability => write!(f, "Invalid QoS reliability"),
            Self::InvalidDurability => write!(f, "Invalid QoS durability"),
            Self::InvalidHistory => write!(f, "Invalid QoS history"),
        }
    }
}

impl std::error::Error for QosDecodeError {}

impl RmwZenohBinding {
    /// Parses the QoS part of a liveliness token advertised by a remote
    /// endpoint. Fields beyond history are accepted but not interpreted.
    pub fn decode(&self, encoded: impl AsRef<str>) -> Result<QosConfiguration, QosDecodeError> {
        let default_qos = QosConfiguration::DEFAULT;
        let mut fields = encoded.as_ref().split(QOS_DELIMITER);

        let reliability = match fields.next().ok_or(QosDecodeError::IncompleteQos)? {
            "" | "0" => default_qos.reliability,
            "1" => QosReliability::Reliable,
            "2" => QosReliability::BestEffort,
            _ => return Err(QosDecodeError::InvalidReliability),
        };

        let durability = match fields.next().ok_or(QosDecodeError::IncompleteQos)? {
            "" | "0" => default_qos.durability,
            "1" => QosDurability::TransientLocal,
            "2" => QosDurability::Volatile,
            _ => return Err(QosDecodeError::InvalidDurability),
        };

        // Empty kind or depth means the default, e.g. "," or "" for the
        // whole field
        let history_field = fields.next().ok_or(QosDecodeError::IncompleteQos)?;
        let (kind, depth) = history_field
            .split_once(QOS_COMPONENT_DELIMITER)
            .unwrap_or((history_field, ""));
        let history = match kind {
            "" | "0" => default_qos.history,
            "1" => QosHistory::KeepLast,
            "2" => QosHistory::KeepAll,
            _ => return Err(QosDecodeError::InvalidHistory),
        };
        let depth = match depth {
            "" => default_qos.depth,
            d => d.parse().map_err(|_| QosDecodeError::InvalidHistory)?,
        };

        Ok(QosConfiguration {
            depth,
            history,
            reliability,
            durability,
        })
    }
}
