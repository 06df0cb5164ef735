pub use map::SharedMap;
pub use queue::SharedQueue;
pub use set::SharedSet;
pub use vector::SharedVec;

mod map;
mod queue;
mod set;
mod vector;

#[cfg(test)]
mod test;
