// Document sessions: explicit, caller-owned context for an uploaded document.
// In-memory only; a session ends on DELETE or when its TTL runs out.

pub mod handlers;
pub mod session;
pub mod upload;
