//! Balancer: composes the roster and claim phases into one run.
//!
//! ```text
//! agents ──► active_agents (offline out, ascending)
//!                 │
//! customers ──► ScoreBounds ──► select_in_range
//!      │                              │
//!      └─► sorted_customers ──► tally_claims ──► resolve_winner
//! ```

use tracing::{debug, info};

use crate::claim::{AssignmentTally, resolve_winner, tally_claims};
use crate::config::BalancerConfig;
use crate::error::{BalancerError, BalancerResult};
use crate::roster::{ScoreBounds, active_agents, select_in_range, sorted_customers};
use crate::types::{Agent, AgentId, Customer, NO_WINNER, Outcome};

/// Assigns customers to agents and reports who serves the most.
///
/// Borrows its rosters; each call works on fresh sorted copies and leaves
/// the caller's data untouched.
#[derive(Debug, Clone)]
pub struct Balancer<'a> {
    agents: &'a [Agent],
    customers: &'a [Customer],
    offline_ids: &'a [AgentId],
    config: BalancerConfig,
}

impl<'a> Balancer<'a> {
    pub fn new(
        agents: &'a [Agent],
        customers: &'a [Customer],
        offline_ids: &'a [AgentId],
    ) -> Self {
        Self {
            agents,
            customers,
            offline_ids,
            config: BalancerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BalancerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    /// Reject rosters the run cannot give a meaningful answer for.
    ///
    /// An online agent may not use [`NO_WINNER`] as its id; an offline one
    /// is never tallied, so it is let through.
    pub fn validate(&self) -> BalancerResult<()> {
        if let Some((pos, agent)) = self
            .agents
            .iter()
            .enumerate()
            .find(|(_, a)| a.id == NO_WINNER && !self.offline_ids.contains(&a.id))
        {
            return Err(BalancerError::InvalidInput(format!(
                "agent at position {pos} (score {}) uses reserved id {NO_WINNER}",
                agent.score
            )));
        }
        if self.customers.is_empty() {
            return Err(BalancerError::EmptyCustomerSet);
        }
        Ok(())
    }

    /// Run offline exclusion, range selection, and claiming.
    pub fn tally(&self) -> BalancerResult<AssignmentTally> {
        self.validate()?;

        let active = active_agents(self.agents, self.offline_ids);
        let bounds = ScoreBounds::of(self.customers)?;
        let available = select_in_range(&active, bounds, self.config.range.filter);
        let customers = sorted_customers(self.customers);

        let tally = tally_claims(&customers, &available);
        debug!(
            agents = tally.claims().len(),
            claimed = tally.total_claimed(),
            max = ?tally.max_customers(),
            "tallied claims"
        );
        Ok(tally)
    }

    pub fn outcome(&self) -> BalancerResult<Outcome> {
        let tally = self.tally()?;
        let outcome = resolve_winner(&tally);
        info!(?outcome, customers = self.customers.len(), "balancing complete");
        Ok(outcome)
    }

    /// Id of the agent serving the most customers, or [`NO_WINNER`] when
    /// that maximum is shared or nobody was tallied.
    pub fn execute(&self) -> BalancerResult<AgentId> {
        Ok(self.outcome()?.agent_id())
    }
}
