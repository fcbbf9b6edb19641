//! Remote equity service.
//!
//! Lets a thin agent offload Monte Carlo work to a bigger machine:
//! `POST /equity` answers an equity request, `GET /health` answers `ok`.
pub mod handlers;
pub use handlers::*;

pub mod server;
pub use server::*;

pub mod wire;
pub use wire::*;
