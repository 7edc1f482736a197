//! Transaction data model: Move actions and type tags, transaction data and
//! its hash, signed transactions and ledger transaction data.

mod action;
pub mod args;
mod errors;
mod ledger;
mod move_types;
mod transaction;

pub use action::{FunctionCall, MoveAction, ScriptCall};
pub use errors::TxTypeError;
pub use ledger::{L1BlockData, L1TxData, LedgerTxData, MultiChainId};
pub use move_types::{FunctionId, Identifier, ModuleId, StructTag, TypeTag, MAX_TYPE_TAG_DEPTH};
pub use transaction::{RoochTransaction, TransactionData, DEFAULT_MAX_GAS_AMOUNT};
