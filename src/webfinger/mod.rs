/// WebFinger domain layer: account resolution, the lookup request, and
/// text rendering of the result.
pub mod account;
pub mod client;
pub mod errors;
pub mod format;

pub use account::{Target, resolve};
pub use client::{HttpTransport, Transport, query};
pub use errors::WebfingerError;
pub use format::format_jrd;
