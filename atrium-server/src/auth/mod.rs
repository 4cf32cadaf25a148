//! Admin authentication: token issuance, the mutation gate and the
//! advisory session tracker.

pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod sessions;

/// Verified admin identity, inserted into request extensions by the
/// mutation gate. Carries no authorization distinction beyond "is an
/// authenticated admin"; the subject is available for auditing.
#[derive(Debug, Clone)]
pub struct AdminIdentity(pub String);
