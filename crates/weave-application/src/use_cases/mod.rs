//! Use cases
//!
//! Building advice chains and routing calls through them.

pub mod advice_chain;
pub mod proxy;

pub use advice_chain::AdviceChain;
pub use proxy::{Proxy, create_proxy};
