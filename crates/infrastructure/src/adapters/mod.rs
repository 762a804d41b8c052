//! Port adapters backed by external libraries.

mod reqwest_transport;
mod system_clock;

pub use reqwest_transport::{DEFAULT_USER_AGENT, ReqwestTransport};
pub use system_clock::SystemClock;
