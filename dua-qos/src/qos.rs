use std::fmt;

use serde::{Deserialize, Serialize};

/// Queue depth used by the rmw default profiles, and carried by `KeepAll`
/// presets where the depth has no effect.
pub const DEFAULT_HISTORY_DEPTH: usize = 10;

#[derive(Debug, Default, Hash, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QosReliability {
    #[default]
    Reliable,
    BestEffort,
}

impl fmt::Display for QosReliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reliable => write!(f, "Reliable"),
            Self::BestEffort => write!(f, "Best Effort"),
        }
    }
}

#[derive(Debug, Default, Hash, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QosHistory {
    #[default]
    KeepLast,
    KeepAll,
}

impl fmt::Display for QosHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepLast => write!(f, "Keep Last"),
            Self::KeepAll => write!(f, "Keep All"),
        }
    }
}

#[derive(Debug, Default, Hash, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QosDurability {
    TransientLocal,
    #[default]
    Volatile,
}

impl fmt::Display for QosDurability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransientLocal => write!(f, "Transient Local"),
            Self::Volatile => write!(f, "Volatile"),
        }
    }
}

/// A complete QoS configuration handed to the transport when a publisher or
/// subscription is set up.
///
/// `depth` only bounds the queue under [`QosHistory::KeepLast`]. It is kept as
/// a plain field, unvalidated, so whatever the caller asked for reaches the
/// transport unchanged.
///
/// The modifiers below return updated copies, so a profile reads as a base
/// plus explicit policies:
///
/// ```
/// use dua_qos::qos::{QosConfiguration, QosDurability};
///
/// let qos = QosConfiguration::DEFAULT.keep_last(20).transient_local();
/// assert_eq!(qos.depth, 20);
/// assert_eq!(qos.durability, QosDurability::TransientLocal);
/// ```
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct QosConfiguration {
    pub depth: usize,
    pub history: QosHistory,
    pub reliability: QosReliability,
    pub durability: QosDurability,
}

impl QosConfiguration {
    /// Equivalent of `rmw_qos_profile_default`.
    pub const DEFAULT: QosConfiguration = QosConfiguration {
        depth: DEFAULT_HISTORY_DEPTH,
        history: QosHistory::KeepLast,
        reliability: QosReliability::Reliable,
        durability: QosDurability::Volatile,
    };

    /// Equivalent of `rmw_qos_profile_services_default`.
    pub const SERVICES_DEFAULT: QosConfiguration = QosConfiguration {
        depth: DEFAULT_HISTORY_DEPTH,
        history: QosHistory::KeepLast,
        reliability: QosReliability::Reliable,
        durability: QosDurability::Volatile,
    };

    pub const fn keep_last(mut self, depth: usize) -> Self {
        self.history = QosHistory::KeepLast;
        self.depth = depth;
        self
    }

    /// Switches to an unbounded queue. The depth field is left as it was.
    pub const fn keep_all(mut self) -> Self {
        self.history = QosHistory::KeepAll;
        self
    }

    pub const fn reliable(mut self) -> Self {
        self.reliability = QosReliability::Reliable;
        self
    }

    pub const fn best_effort(mut self) -> Self {
        self.reliability = QosReliability::BestEffort;
        self
    }

    pub const fn durability_volatile(mut self) -> Self {
        self.durability = QosDurability::Volatile;
        self
    }

    pub const fn transient_local(mut self) -> Self {
        self.durability = QosDurability::TransientLocal;
        self
    }

    /// Number of samples the local queue may hold, `None` when unbounded.
    pub fn queue_bound(&self) -> Option<usize> {
        match self.history {
            QosHistory::KeepLast => Some(self.depth),
            QosHistory::KeepAll => None,
        }
    }
}

impl Default for QosConfiguration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for QosConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QoS({}, {}, ", self.reliability, self.durability)?;
        match self.history {
            QosHistory::KeepLast => write!(f, "{} ({}))", self.history, self.depth),
            QosHistory::KeepAll => write!(f, "{})", self.history),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_rmw_default() {
        let qos = QosConfiguration::default();
        assert_eq!(qos.depth, 10);
        assert_eq!(qos.history, QosHistory::KeepLast);
        assert_eq!(qos.reliability, QosReliability::Reliable);
        assert_eq!(qos.durability, QosDurability::Volatile);
        assert_eq!(qos, QosConfiguration::SERVICES_DEFAULT);
    }

    #[test]
    fn test_modifiers_touch_one_policy() {
        let base = QosConfiguration::DEFAULT;

        let be = base.best_effort();
        assert_eq!(be.reliability, QosReliability::BestEffort);
        assert_eq!((be.depth, be.history, be.durability), (base.depth, base.history, base.durability));

        let tl = base.transient_local();
        assert_eq!(tl.durability, QosDurability::TransientLocal);
        assert_eq!(tl.reliability, base.reliability);

        assert_eq!(tl.durability_volatile(), base);
        assert_eq!(be.reliable(), base);
    }

    #[test]
    fn test_keep_all_keeps_depth_field() {
        let qos = QosConfiguration::DEFAULT.keep_last(3).keep_all();
        assert_eq!(qos.history, QosHistory::KeepAll);
        assert_eq!(qos.depth, 3);
        assert_eq!(qos.queue_bound(), None);

        let qos = qos.keep_last(7);
        assert_eq!(qos.queue_bound(), Some(7));
    }

    #[test]
    fn test_zero_depth_is_not_rejected() {
        let qos = QosConfiguration::DEFAULT.keep_last(0);
        assert_eq!(qos.depth, 0);
        assert_eq!(qos.queue_bound(), Some(0));
    }

    #[test]
    fn test_display() {
        let qos = QosConfiguration::DEFAULT.keep_last(5).best_effort();
        assert_eq!(qos.to_string(), "QoS(Best Effort, Volatile, Keep Last (5))");

        let qos = QosConfiguration::DEFAULT.keep_all().transient_local();
        assert_eq!(qos.to_string(), "QoS(Reliable, Transient Local, Keep All)");
    }

    #[test]
    fn test_serde_snake_case() {
        let qos = QosConfiguration::DEFAULT.keep_all().best_effort();
        let json = serde_json::to_value(qos).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "depth": 10,
                "history": "keep_all",
                "reliability": "best_effort",
                "durability": "volatile",
            })
        );
        let back: QosConfiguration = serde_json::from_value(json).unwrap();
        assert_eq!(back, qos);
    }
}
