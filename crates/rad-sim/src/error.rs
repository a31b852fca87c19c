use rad_core::{ConfigError, ParticleId, SimTime};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid simulation configuration: {0}")]
    Config(#[from] ConfigError),

    /// A particle's position or velocity became NaN or infinite.  The step
    /// that produced it was discarded.
    #[error("particle {id} reached a non-finite state at {time}; step discarded")]
    NonFiniteState { id: ParticleId, time: SimTime },
}

pub type SimResult<T> = Result<T, SimError>;
