//! Engine module for `optspec`.
//! See [documentation root](https://docs.rs/optspec/latest/optspec/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod compiler;
mod engine;
mod model;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use compiler::SpecError;
pub use engine::ParseError;
pub use model::{Action, Value, ValueKind};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
