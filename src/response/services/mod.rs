//! Response handling services.

mod chain;

pub use chain::{ResponseHandlerChain, ResponseHandlerChainBuilder};
