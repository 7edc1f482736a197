//! Native addresses, object identifiers and the hash functions that derive
//! them.

#[macro_use]
mod macros;

mod address;
mod errors;
pub mod hash;
mod object_id;

pub use address::{
    normalize_address, RoochAddress, DERIVE_NAMED_OBJECT, DERIVE_OBJECT_ADDRESS_FROM_SEED,
    DERIVE_OBJECT_FROM_GUID, DERIVE_RESOURCE_ACCOUNT, ROOCH_ADDRESS_LENGTH, ROOCH_HRP,
};
pub use errors::AddressError;
pub use hash::H256;
pub use object_id::ObjectId;
