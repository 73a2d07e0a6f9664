//! Provider utilities

mod timing;

pub use timing::TimedOperation;
