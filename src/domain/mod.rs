//! Domain entities and value objects for the console's resources.

pub mod agency;
pub mod ledger;
pub mod payout;
pub mod post;
pub mod relation;
pub mod types;
pub mod user;
pub mod video;
