// Chat: keyword-driven canned replies to follow-up questions about a document.
// Stateless: the client sends its whole transcript on every call.

pub mod handlers;
pub mod responses;
pub mod selector;
