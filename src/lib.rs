pub mod agent;
pub mod behavior;
pub mod config;
pub mod error;
pub mod math;
pub mod node;
pub mod perception;
pub mod protocol;
pub mod transport;

pub use agent::Agent;
pub use error::{AgentError, AgentResult, ParseError};
