//! Bearer-token authentication: JWT verification, middleware, and the
//! request-scoped caller identity.

pub mod jwt;
pub mod middleware;
pub mod models;

pub use jwt::{extract_bearer, JwtService};
pub use models::{Claims, UserContext};
