//! QoS settings for the endpoints behind an action server or client.

use serde::{Deserialize, Serialize};

use crate::qos::QosConfiguration;

/// QoS for the three services and two topics an action is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionQos {
    pub goal_service: QosConfiguration,
    pub cancel_service: QosConfiguration,
    pub result_service: QosConfiguration,
    pub feedback_topic: QosConfiguration,
    /// Transient local, so a client that attaches late still receives the
    /// current goal states.
    pub status_topic: QosConfiguration,
}

impl Default for ActionQos {
    fn default() -> Self {
        Self {
            goal_service: QosConfiguration::SERVICES_DEFAULT,
            cancel_service: QosConfiguration::SERVICES_DEFAULT,
            result_service: QosConfiguration::SERVICES_DEFAULT,
            feedback_topic: QosConfiguration::DEFAULT,
            status_topic: QosConfiguration::DEFAULT.transient_local(),
        }
    }
}

/// Returns the default settings for action servers.
pub fn get_action_server_qos() -> ActionQos {
    ActionQos::default()
}

/// Returns the default settings for action clients.
///
/// Both sides of an action must agree, so this is the server set.
pub fn get_action_client_qos() -> ActionQos {
    ActionQos::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qos::{QosDurability, QosHistory, QosReliability};

    #[test]
    fn test_status_topic_is_latched() {
        let qos = get_action_server_qos();
        assert_eq!(qos.status_topic.durability, QosDurability::TransientLocal);
        assert_eq!(qos.status_topic.reliability, QosReliability::Reliable);
        assert_eq!(qos.feedback_topic.durability, QosDurability::Volatile);
    }

    #[test]
    fn test_services_use_services_default() {
        let qos = get_action_client_qos();
        for service in [qos.goal_service, qos.cancel_service, qos.result_service] {
            assert_eq!(service, QosConfiguration::SERVICES_DEFAULT);
            assert_eq!(service.history, QosHistory::KeepLast);
        }
    }

    #[test]
    fn test_server_and_client_agree() {
        assert_eq!(get_action_server_qos(), get_action_client_qos());
    }
}
