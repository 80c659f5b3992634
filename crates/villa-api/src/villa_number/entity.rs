//! [`StoreEntity`] implementation for [`VillaNumber`].
//!
//! The villa number is the key and is chosen by the caller, so the store keeps it
//! as-is and only rejects duplicates.

use crate::model::VillaNumber;
use resource_store::StoreEntity;

impl StoreEntity for VillaNumber {
    type Id = i32;

    fn id(&self) -> i32 {
        self.villa_no
    }
}
