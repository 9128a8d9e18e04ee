//! Service layer providing the trivia business logic on top of models.
//! - Listing, search and category filtering share one id-ordered pagination
//!   scheme.
//! - Quiz selection draws uniformly from a filtered candidate set.
//! - Provides clear error types mapped to HTTP statuses by the server crate.

pub mod category_service;
pub mod errors;
pub mod pagination;
pub mod question_service;
pub mod quiz_service;
#[cfg(test)]
pub mod test_support;
