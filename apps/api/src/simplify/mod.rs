// Document simplification: plain-language explanation plus action items.
// The shipped engine is canned; handlers only see the `DocumentSimplifier` trait.

pub mod content;
pub mod handlers;
pub mod simplifier;
