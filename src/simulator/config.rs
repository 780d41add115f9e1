//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to simulate
    pub num_sessions: u32,

    /// Buy/sell actions attempted per session
    pub actions_per_session: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-session)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_sessions: 1_000,
            actions_per_session: 50,
            seed: None,
            verbosity: 1,
        }
    }
}
