//! Advice implementations
//!
//! | Advice | Default priority | Behavior |
//! |--------|------------------|----------|
//! | [`TimingAdvice`] | 1 | measures wall-clock time around the rest of the chain |
//! | [`CachingAdvice`] | 2 | returns stored results for repeated integer keys |
//!
//! With the default priorities timing is outermost, so the time it
//! reports always includes the cache lookup.

pub mod caching;
pub mod timing;

pub use caching::CachingAdvice;
pub use timing::TimingAdvice;
