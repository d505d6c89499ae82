/**
 * Ordinary least-squares fitting of linear curves to market observations.
 */
mod fit;
pub use fit::*;

/**
 * Intersection of demand and supply curves.
 */
mod equilibrium;
pub use equilibrium::*;

/**
 * The profit-maximizing quantity against a linear demand curve.
 */
mod profit;
pub use profit::*;

/**
 * Point price-elasticity of linear demand.
 */
mod elasticity;
pub use elasticity::*;

/**
 * Orchestration of the above, from raw buyer and seller records to a full analysis.
 */
mod analysis;
pub use analysis::*;

// Re-export the models so that consumers need not depend on mkt-core directly
pub use mkt_core::models;
