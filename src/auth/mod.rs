//! Authentication: session store, credential vault, provider chain and
//! role-based route guarding

mod context;
mod guard;
mod normalize;
mod policy;
mod providers;
mod store;
mod vault;

pub use context::{use_session, SessionProvider};
pub use guard::{check_access, landing_for, AccessDecision, LandingDecision};
