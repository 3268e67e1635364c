//! Roster preparation: offline exclusion, ordering, and the active range.
//!
//! Every function here borrows its input and returns a freshly built
//! vector; caller-supplied rosters are never reordered in place.

use std::collections::HashSet;

use tracing::debug;

use crate::config::RangeFilter;
use crate::error::{BalancerError, BalancerResult};
use crate::types::{Agent, AgentId, Customer, Score};

/// Lowest and highest customer scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBounds {
    pub lowest: Score,
    pub highest: Score,
}

impl ScoreBounds {
    /// Compute the bounds of a customer roster.
    ///
    /// Fails with [`BalancerError::EmptyCustomerSet`] when there are no
    /// customers to take bounds over.
    pub fn of(customers: &[Customer]) -> BalancerResult<Self> {
        let mut scores = customers.iter().map(|c| c.score);
        let first = scores.next().ok_or(BalancerError::EmptyCustomerSet)?;

        let (lowest, highest) =
            scores.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));

        Ok(Self { lowest, highest })
    }
}

/// Drop offline agents and order the rest by ascending score.
///
/// The sort is stable: agents sharing a score keep their input order.
pub fn active_agents(agents: &[Agent], offline_ids: &[AgentId]) -> Vec<Agent> {
    let offline: HashSet<AgentId> = offline_ids.iter().copied().collect();

    let mut active: Vec<Agent> = agents
        .iter()
        .filter(|a| !offline.contains(&a.id))
        .copied()
        .collect();
    active.sort_by_key(|a| a.score);

    debug!(
        total = agents.len(),
        offline = agents.len() - active.len(),
        active = active.len(),
        "excluded offline agents"
    );
    active
}

/// Narrow ascending-sorted agents to those relevant for `bounds`.
pub fn select_in_range(
    sorted_agents: &[Agent],
    bounds: ScoreBounds,
    filter: RangeFilter,
) -> Vec<Agent> {
    let mut selected = Vec::new();

    for agent in sorted_agents {
        if bounds.lowest <= agent.score {
            selected.push(*agent);
        }
        // Nothing past the first agent covering `highest` is visited.
        if filter == RangeFilter::FirstAtOrAboveHighest && agent.score >= bounds.highest {
            break;
        }
    }

    debug!(
        lowest = bounds.lowest,
        highest = bounds.highest,
        ?filter,
        selected = selected.len(),
        "selected agents in active range"
    );
    selected
}

/// Customers ordered by ascending score.
pub fn sorted_customers(customers: &[Customer]) -> Vec<Customer> {
    let mut sorted = customers.to_vec();
    sorted.sort_by_key(|c| c.score);
    sorted
}
