//! Balancing scenario tests.
//!
//! Runs the fixture scenarios in `fixtures/scenarios.toml` end to end and
//! checks the run-level properties: determinism, claim conservation, the
//! early stop at the highest customer score, and large-roster timing.

use std::sync::Once;
use std::time::{Duration, Instant};

use proptest::collection::vec;
use proptest::prelude::*;
use serde::Deserialize;
use success_balancer::*;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for test diagnostics.
///
/// Controlled by `RUST_LOG` env var (e.g. `RUST_LOG=debug`).
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

// ── Fixtures ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    scenario: Vec<Scenario>,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    agent_scores: Vec<Score>,
    customer_scores: Vec<Score>,
    offline: Vec<AgentId>,
    expected: AgentId,
}

fn load_scenarios() -> Vec<Scenario> {
    let file: ScenarioFile = toml::from_str(include_str!("fixtures/scenarios.toml")).unwrap();
    file.scenario
}

fn build_agents(scores: &[Score]) -> Vec<Agent> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &s)| Agent::new(i as AgentId + 1, s))
        .collect()
}

fn build_customers(scores: &[Score]) -> Vec<Customer> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &s)| Customer::new(i as u32 + 1, s))
        .collect()
}

// ── Scenarios ────────────────────────────────────────────────────

#[test]
fn fixture_scenarios_resolve_expected_agent() {
    init_tracing();

    let scenarios = load_scenarios();
    assert_eq!(scenarios.len(), 7);

    for scenario in scenarios {
        let agents = build_agents(&scenario.agent_scores);
        let customers = build_customers(&scenario.customer_scores);

        let result = Balancer::new(&agents, &customers, &scenario.offline)
            .execute()
            .unwrap();

        assert_eq!(result, scenario.expected, "scenario: {}", scenario.name);
    }
}

#[test]
fn large_roster_finishes_quickly() {
    init_tracing();

    let agents = build_agents(&(1..=999).collect::<Vec<Score>>());
    let customers = build_customers(&vec![998; 10_000]);

    let started = Instant::now();
    let result = Balancer::new(&agents, &customers, &[999]).execute().unwrap();

    assert_eq!(result, 998);
    assert!(
        started.elapsed() < Duration::from_secs(1),
        "took {:?}",
        started.elapsed()
    );
}

#[test]
fn large_roster_tally_has_single_claimant() {
    let agents = build_agents(&(1..=999).collect::<Vec<Score>>());
    let customers = build_customers(&vec![998; 10_000]);

    let tally = Balancer::new(&agents, &customers, &[999]).tally().unwrap();

    // Only agent 998 sits in [998, 998] and the walk stops there.
    assert_eq!(tally.claims(), &[Claim { agent_id: 998, customers: 10_000 }]);
}

// ── Properties ───────────────────────────────────────────────────

#[test]
fn repeated_runs_are_identical() {
    let agents = build_agents(&[11, 21, 31, 3, 4, 5]);
    let customers = build_customers(&[10, 10, 10, 20, 20, 30, 30, 30, 20, 60]);
    let balancer = Balancer::new(&agents, &customers, &[]);

    let first = balancer.tally().unwrap();
    for _ in 0..10 {
        assert_eq!(balancer.tally().unwrap(), first);
        assert_eq!(balancer.execute().unwrap(), NO_WINNER);
    }
}

proptest! {
    #[test]
    fn claims_never_exceed_customers(
        agent_scores in vec(1..100i64, 1..12),
        customer_scores in vec(1..100i64, 1..30),
    ) {
        init_tracing();

        let offline: Vec<AgentId> = (1..=agent_scores.len() as AgentId)
            .filter(|id| id % 4 == 0)
            .collect();
        let agents = build_agents(&agent_scores);
        let customers = build_customers(&customer_scores);

        for filter in [RangeFilter::FirstAtOrAboveHighest, RangeFilter::AllFromLowest] {
            let config = BalancerConfig::default().with_range_filter(filter);
            let balancer = Balancer::new(&agents, &customers, &offline).with_config(config);
            let tally = balancer.tally().unwrap();

            prop_assert!(tally.total_claimed() <= customers.len());
            prop_assert_eq!(tally.total_claimed() + tally.unclaimed(), customers.len());
            prop_assert!(tally.claims().iter().all(|c| !offline.contains(&c.agent_id)));

            let result = balancer.execute().unwrap();
            match resolve_winner(&tally) {
                Outcome::Winner(id) => {
                    prop_assert_eq!(result, id);
                    let max = tally.max_customers().unwrap();
                    prop_assert_eq!(tally.claims().iter().filter(|c| c.customers == max).count(), 1);
                }
                Outcome::NoUniqueWinner => {
                    prop_assert_eq!(result, NO_WINNER);
                }
            }
        }
    }

    #[test]
    fn range_filter_never_changes_the_winner(
        agent_scores in vec(1..50i64, 1..10),
        customer_scores in vec(1..50i64, 1..20),
    ) {
        let agents = build_agents(&agent_scores);
        let customers = build_customers(&customer_scores);

        let literal = Balancer::new(&agents, &customers, &[]).execute().unwrap();
        let full = Balancer::new(&agents, &customers, &[])
            .with_config(BalancerConfig::default().with_range_filter(RangeFilter::AllFromLowest))
            .execute()
            .unwrap();

        prop_assert_eq!(literal, full);
    }
}

#[test]
fn only_first_agent_at_highest_score_is_kept() {
    let agents = build_agents(&[70, 30, 70]);
    let customers = build_customers(&[20, 30, 50, 70]);

    let tally = Balancer::new(&agents, &customers, &[]).tally().unwrap();

    assert_eq!(tally.count_for(2), Some(2));
    assert_eq!(tally.count_for(1), Some(2));
    assert_eq!(tally.count_for(3), None);
}

#[test]
fn agents_below_active_range_are_dropped() {
    let agents = build_agents(&[5, 40, 80]);
    let customers = build_customers(&[30, 35, 60]);

    let tally = Balancer::new(&agents, &customers, &[]).tally().unwrap();

    assert_eq!(tally.count_for(1), None);
    assert_eq!(tally.count_for(2), Some(2));
    assert_eq!(tally.count_for(3), Some(1));
    assert_eq!(Balancer::new(&agents, &customers, &[]).execute().unwrap(), 2);
}

#[test]
fn outcome_is_typed() {
    let agents = build_agents(&[60, 20, 95, 75]);
    let customers = build_customers(&[90, 20, 70, 40, 60, 10]);

    let outcome = Balancer::new(&agents, &customers, &[2, 4]).outcome().unwrap();
    assert_eq!(outcome, Outcome::Winner(1));
}

#[test]
fn empty_customers_surface_error() {
    let agents = build_agents(&[10, 20]);
    let err = Balancer::new(&agents, &[], &[]).execute().unwrap_err();

    assert!(matches!(err, BalancerError::EmptyCustomerSet));
    assert_eq!(
        err.to_string(),
        "customer set is empty; score bounds are undefined"
    );
}
