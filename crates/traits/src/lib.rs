pub mod clock;
pub mod resource;

pub use clock::{Clock, FixedClock, SystemClock};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
