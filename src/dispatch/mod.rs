mod partitioner;
mod dispatcher;

pub use partitioner::*;
pub use dispatcher::*;
