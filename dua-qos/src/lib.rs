//! Reference QoS profiles shared by DUA modules.
//!
//! Producers and consumers of the same kind of data should agree on delivery
//! semantics without each picking parameters by hand. This crate names those
//! choices: pick a family for the semantics, then the constructor for the
//! kind of data.
//!
//! | Family | Semantics |
//! |---|---|
//! | [`persistent`] | reliable, transient local: late joiners get recent samples |
//! | [`reliable`] | reliable, volatile |
//! | [`best_effort`] | best effort, volatile |
//! | [`visualization`] | best effort, volatile, shallow queues |
//!
//! ```
//! use dua_qos::{reliable, visualization};
//! use dua_qos::qos::{QosHistory, QosReliability};
//!
//! let scan = reliable::get_scan_qos(Some(10));
//! assert_eq!(scan.depth, 10);
//! assert_eq!(scan.history, QosHistory::KeepLast);
//!
//! let markers = visualization::get_marker_qos(None);
//! assert_eq!(markers.reliability, QosReliability::BestEffort);
//! ```

pub mod action;
pub mod binding;
pub mod catalog;
pub mod config;
pub mod presets;
pub mod qos;

pub use presets::{best_effort, persistent, reliable, visualization};

pub use action::{ActionQos, get_action_client_qos, get_action_server_qos};
pub use binding::QosBinding;
pub use catalog::{CatalogError, Category, Family, PresetKey};
pub use config::{Catalog, CatalogConfig, ConfigError};
pub use qos::{QosConfiguration, QosDurability, QosHistory, QosReliability};
