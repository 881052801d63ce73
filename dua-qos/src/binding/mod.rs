//! Translation of [`QosConfiguration`] into transport-native settings.
//!
//! Presets are transport agnostic. Each transport gets a [`QosBinding`] that
//! turns a configuration into whatever its publisher/subscription setup API
//! expects.

pub mod rmw_zenoh;
#[cfg(feature = "zenoh")]
pub mod zenoh;

pub use self::rmw_zenoh::{QosDecodeError, RmwZenohBinding};
#[cfg(feature = "zenoh")]
pub use self::zenoh::{ZenohBinding, ZenohQos};

use crate::qos::QosConfiguration;

pub trait QosBinding {
    type Native;

    fn translate(&self, qos: &QosConfiguration) -> Self::Native;
}

impl<B: QosBinding + ?Sized> QosBinding for &B {
    type Native = B::Native;

    fn translate(&self, qos: &QosConfiguration) -> Self::Native {
        (**self).translate(qos)
    }
}
