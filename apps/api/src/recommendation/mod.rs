// Recommendation Orchestrator: drives bulk generation in both directions
// (seeker -> jobs, job -> seekers), recommendation status updates and the
// per-seeker preference store.

pub mod handlers;
pub mod orchestrator;
pub mod preferences;
