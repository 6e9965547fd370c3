//! quadro-middleware
//!
//! Connector wrappers that add cross-cutting behavior without touching
//! connector implementations. The one wrapper here is [`CachingConnector`],
//! a TTL read-through cache.
#![warn(missing_docs)]

mod cache;
mod clock;

pub use cache::CachingConnector;
pub use clock::{Clock, ManualClock, SystemClock};
