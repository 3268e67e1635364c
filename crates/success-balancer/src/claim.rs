//! Greedy claiming and winner resolution.
//!
//! Customers are consumed from an ascending-sorted pool. Because the pool
//! is sorted, the unclaimed customers always form a suffix of it, so a
//! single cursor replaces repeated filter-and-remove passes:
//!
//! ```text
//! customers: [10 20 40 | 60 70 90]     agent(60) claims 60
//!                        ^ cursor      → [10 20 40 60 | 70 90]
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::BalancerError;
use crate::types::{Agent, AgentId, Customer, Outcome};

/// Customers claimed by one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub agent_id: AgentId,
    pub customers: usize,
}

/// Per-agent claim counts for a single balancing run, in claiming order.
///
/// Deserialization rejects tallies claiming more customers than they hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TallyRecord")]
pub struct AssignmentTally {
    claims: Vec<Claim>,
    total_customers: usize,
}

#[derive(Deserialize)]
struct TallyRecord {
    claims: Vec<Claim>,
    total_customers: usize,
}

impl TryFrom<TallyRecord> for AssignmentTally {
    type Error = BalancerError;

    fn try_from(record: TallyRecord) -> Result<Self, Self::Error> {
        let claimed = record
            .claims
            .iter()
            .try_fold(0usize, |sum, c| sum.checked_add(c.customers))
            .ok_or_else(|| BalancerError::InvalidInput("tally claim counts overflow".to_string()))?;
        if claimed > record.total_customers {
            return Err(BalancerError::InvalidInput(format!(
                "tally claims {claimed} customers but holds only {}",
                record.total_customers
            )));
        }
        Ok(Self {
            claims: record.claims,
            total_customers: record.total_customers,
        })
    }
}

impl AssignmentTally {
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Largest claim count, or `None` when no agent was tallied.
    pub fn max_customers(&self) -> Option<usize> {
        self.claims.iter().map(|c| c.customers).max()
    }

    pub fn total_claimed(&self) -> usize {
        self.claims.iter().map(|c| c.customers).sum()
    }

    /// Customers no tallied agent was able to serve.
    pub fn unclaimed(&self) -> usize {
        self.total_customers.saturating_sub(self.total_claimed())
    }

    /// Customers claimed under `agent_id`, summed over duplicate ids.
    pub fn count_for(&self, agent_id: AgentId) -> Option<usize> {
        self.claims
            .iter()
            .filter(|c| c.agent_id == agent_id)
            .map(|c| c.customers)
            .reduce(|a, b| a + b)
    }
}

/// Let each agent, in order, claim every remaining customer it can serve.
///
/// `sorted_customers` must be in ascending score order. Agents are
/// expected in ascending score order too; an agent scoring below an
/// earlier one finds nothing left to claim.
pub fn tally_claims(sorted_customers: &[Customer], agents: &[Agent]) -> AssignmentTally {
    let mut cursor = 0;
    let mut claims = Vec::with_capacity(agents.len());

    for agent in agents {
        let start = cursor;
        while cursor < sorted_customers.len() && agent.can_serve(&sorted_customers[cursor]) {
            cursor += 1;
        }

        let claimed = cursor - start;
        debug!(agent = agent.id, score = agent.score, claimed, "agent claimed customers");
        claims.push(Claim {
            agent_id: agent.id,
            customers: claimed,
        });
    }

    let unclaimed = sorted_customers.len() - cursor;
    if unclaimed > 0 {
        warn!(unclaimed, "customers left without a capable agent");
    }

    AssignmentTally {
        claims,
        total_customers: sorted_customers.len(),
    }
}

/// Pick the single agent holding the maximum claim count.
pub fn resolve_winner(tally: &AssignmentTally) -> Outcome {
    let Some(max) = tally.max_customers() else {
        return Outcome::NoUniqueWinner;
    };

    let mut leaders = tally.claims.iter().filter(|c| c.customers == max);
    match (leaders.next(), leaders.next()) {
        (Some(leader), None) => Outcome::Winner(leader.agent_id),
        _ => {
            debug!(max, "claim maximum is shared");
            Outcome::NoUniqueWinner
        }
    }
}
