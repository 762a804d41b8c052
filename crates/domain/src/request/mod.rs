//! HTTP request domain types

mod call;
mod method;

pub use call::TransportCall;
pub use method::HttpMethod;
