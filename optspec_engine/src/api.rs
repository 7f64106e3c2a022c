mod core;
mod destination;
mod results;

pub use self::core::*;
pub(crate) use destination::Target;
pub use destination::{Destination, ListSlot, MapSlot, ScalarSlot};
pub use results::*;
