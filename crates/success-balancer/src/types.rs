//! Roster entities shared by every balancing phase.

use serde::{Deserialize, Serialize};

/// Identifier of a customer-success agent.
pub type AgentId = u32;

/// Capability or need level. Totally ordered; duplicates are allowed.
pub type Score = i64;

/// Returned by [`crate::Balancer::execute`] when no single agent serves
/// the most customers. Agents may not use this id.
pub const NO_WINNER: AgentId = 0;

/// A customer-success representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub score: Score,
}

impl Agent {
    pub fn new(id: AgentId, score: Score) -> Self {
        Self { id, score }
    }

    /// Whether this agent is able to serve `customer`.
    pub fn can_serve(&self, customer: &Customer) -> bool {
        customer.score <= self.score
    }
}

/// A customer and its support need level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub score: Score,
}

impl Customer {
    pub fn new(id: u32, score: Score) -> Self {
        Self { id, score }
    }
}

/// Result of a balancing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "agent_id", rename_all = "snake_case")]
pub enum Outcome {
    /// Exactly one agent claimed the maximum number of customers.
    Winner(AgentId),
    /// Several agents tie for the maximum, or no agent was tallied.
    NoUniqueWinner,
}

impl Outcome {
    /// Flatten to an id, mapping [`Outcome::NoUniqueWinner`] to [`NO_WINNER`].
    pub fn agent_id(self) -> AgentId {
        match self {
            Outcome::Winner(id) => id,
            Outcome::NoUniqueWinner => NO_WINNER,
        }
    }
}
