pub mod batch;
pub mod pool;

pub use batch::{batch_ranges, evaluate_batch};
pub use pool::WorkerPool;
