//! Stored records and the transfer objects exchanged over HTTP.
//!
//! Mapping between the two is plain `From` conversions, one per direction.

pub mod villa;
pub mod villa_number;

pub use villa::*;
pub use villa_number::*;
