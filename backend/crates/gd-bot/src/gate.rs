use std::num::NonZeroU32;
use std::time::Duration;

use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use log::{debug, warn};

/// Why an incoming event was or was not let through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Accepted,
    /// Sender is not the owner, or unknown
    NotOwner,
    /// Owner spoke again before the cooldown elapsed
    CoolingDown,
}

impl GateDecision {
    pub fn is_accepted(self) -> bool {
        self == GateDecision::Accepted
    }
}

/// Owner allow-list plus a per-caller cooldown.
///
/// The limiter holds one cell per caller (burst 1), so an event passes only
/// when a full cooldown has elapsed since that caller's last *accepted*
/// event. Rejected events leave the limiter untouched.
pub struct AccessGate {
    owner_id: u64,
    cooldown: Duration,
    limiter: DefaultKeyedRateLimiter<u64>,
}

impl AccessGate {
    pub fn new(owner_id: u64, cooldown: Duration) -> Self {
        let quota = Quota::with_period(cooldown)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(NonZeroU32::MIN);

        Self {
            owner_id,
            cooldown,
            limiter: RateLimiter::keyed(quota),
        }
    }

    pub fn owner_id(&self) -> u64 {
        self.owner_id
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn check(&self, user_id: Option<u64>) -> GateDecision {
        let Some(user_id) = user_id.filter(|id| *id == self.owner_id) else {
            debug!("Ignoring event from non-owner {:?}", user_id);
            return GateDecision::NotOwner;
        };

        match self.limiter.check_key(&user_id) {
            Ok(()) => GateDecision::Accepted,
            Err(_) => {
                warn!("Rate limit exceeded for owner {}", user_id);
                GateDecision::CoolingDown
            }
        }
    }
}
