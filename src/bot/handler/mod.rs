// Exported functions
pub use self::general::{action_help, action_start, invalid_state};
pub use self::symbol::action_symbol;

// Exported structs and types
pub use self::symbol::Reply;
pub use self::utils::HandlerResult;

// Submodules
mod constants;
mod general;
mod symbol;
mod utils;
