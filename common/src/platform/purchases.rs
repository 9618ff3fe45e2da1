use crate::log;

use super::Capability;

pub const REMOVE_ADS_PRODUCT: &str = "com.sequencemaster.removeads";

const NATIVE_BUILD_REQUIRED: &str = "In-app purchases require a native build of the app. \
    This feature will be available once the app is published on the App Store.";

pub trait PurchaseService {
    fn initialize(&mut self) -> Capability<()>;

    /// `Available(true)` once the product is owned.
    fn purchase(&mut self, product: &str) -> Capability<bool>;

    /// Products the store still has on record for this player.
    fn restore(&mut self) -> Capability<Vec<String>>;

    fn status(&self, product: &str) -> Capability<bool>;
}

/// Store access on a platform without one.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedPurchases;

impl PurchaseService for UnsupportedPurchases {
    fn initialize(&mut self) -> Capability<()> {
        log!("In-app purchases are not available on this platform");
        Capability::not_available(NATIVE_BUILD_REQUIRED)
    }

    fn purchase(&mut self, product: &str) -> Capability<bool> {
        log!("Purchase of {} requested without a store", product);
        Capability::not_available(NATIVE_BUILD_REQUIRED)
    }

    fn restore(&mut self) -> Capability<Vec<String>> {
        log!("Restore requested without a store");
        Capability::not_available(NATIVE_BUILD_REQUIRED)
    }

    fn status(&self, product: &str) -> Capability<bool> {
        log!("Purchase status of {} requested without a store", product);
        Capability::not_available(NATIVE_BUILD_REQUIRED)
    }
}
