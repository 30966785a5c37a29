// bot/mod.rs

// Exported functions
pub use self::dispatcher::run_dispatcher;
pub use self::processor::{normalize_symbol, search_url};

// Exported structs and types
pub use self::dispatcher::{BotError, Command};
pub use self::handler::{HandlerResult, Reply};
pub use self::processor::{ProcessError, Symbol, EXCHANGE_SUFFIX};

// Declare submodules
mod dispatcher;
mod handler;
mod processor;
