pub mod poller;
pub mod store;

pub use poller::{ListingPoller, PollerConfig, PollerHandle};
pub use store::{ListingSnapshot, ListingStore};
