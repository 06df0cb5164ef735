pub use flow::{Direction, Flow, Key, Protocol, Route};
pub use registry::Registry;

mod flow;
mod registry;
