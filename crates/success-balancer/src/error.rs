//! Balancer error types.

use thiserror::Error;

/// Errors that can occur while balancing customers across agents.
#[derive(Debug, Error)]
pub enum BalancerError {
    #[error("customer set is empty; score bounds are undefined")]
    EmptyCustomerSet,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid balancer configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type BalancerResult<T> = Result<T, BalancerError>;
