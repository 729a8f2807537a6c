//! The two wizards.
//!
//! - [`pull`]: menu-driven metadata retrieval against one org
//! - [`bootstrap`]: linear scratch environment setup

pub mod bootstrap;
pub mod pull;
