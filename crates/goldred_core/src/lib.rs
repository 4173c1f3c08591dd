pub mod board;
pub mod errors;
pub mod game;
pub mod rules;
pub mod types;

// Re-export the rules-engine surface consumed by frontends
pub use board::*;
pub use errors::*;
pub use game::*;
pub use rules::*;
pub use types::*;
