//! Shared newtype wrappers and formatting helpers.

mod id;
mod price;

pub use id::ProductId;
pub use price::format_usd;
