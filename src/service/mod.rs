//! Resource orchestrators.
//!
//! They turn validated input into store calls and store rows into wire
//! models. Handlers decode requests and pick status codes; everything in
//! between lives here.

mod chirps;
mod users;

pub use chirps::ChirpService;
pub use users::UserService;
