//! [`StoreEntity`] implementation for [`Villa`].
//!
//! Villas get server-assigned ids (highest id ever stored + 1, starting at 1) and their
//! names are unique ignoring case.

use crate::model::Villa;
use resource_store::StoreEntity;

impl StoreEntity for Villa {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }

    fn assign_id(&mut self, last: Option<&i32>) {
        self.id = last.map_or(1, |last| last + 1);
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name.to_lowercase())
    }
}
