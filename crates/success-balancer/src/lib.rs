//! success-balancer: score-range balancing of customers across agents.
//!
//! Given a roster of customer-success agents, the ids of agents that are
//! offline, and a roster of customers, finds the agent that ends up
//! serving the most customers. A customer can only go to an agent whose
//! score is at least the customer's, and is always claimed by the
//! lowest-scoring such agent.
//!
//! # Components
//!
//! - **`roster`**: Offline exclusion, ordering, and active-range selection
//! - **`claim`**: Greedy claiming and winner resolution
//! - **`balancer`**: `Balancer`, the entry point composing both
//! - **`config`**: `BalancerConfig` loaded from TOML
//!
//! # Example
//!
//! ```
//! use success_balancer::{Agent, Balancer, Customer};
//!
//! let agents = [Agent::new(1, 60), Agent::new(2, 20), Agent::new(3, 95), Agent::new(4, 75)];
//! let customers = [
//!     Customer::new(1, 90),
//!     Customer::new(2, 20),
//!     Customer::new(3, 70),
//!     Customer::new(4, 40),
//!     Customer::new(5, 60),
//!     Customer::new(6, 10),
//! ];
//!
//! let winner = Balancer::new(&agents, &customers, &[2, 4]).execute()?;
//! assert_eq!(winner, 1);
//! # Ok::<(), success_balancer::BalancerError>(())
//! ```

pub mod balancer;
pub mod claim;
pub mod config;
pub mod error;
pub mod roster;
pub mod types;

pub use balancer::Balancer;
pub use claim::{AssignmentTally, Claim, resolve_winner, tally_claims};
pub use config::{BalancerConfig, RangeConfig, RangeFilter};
pub use error::{BalancerError, BalancerResult};
pub use roster::{ScoreBounds, active_agents, select_in_range, sorted_customers};
pub use types::*;
