mod account;
mod claims_pending_approval;
mod config;
mod drawing;
mod evaluate;
mod ready;
mod round;

pub use account::account;
pub use claims_pending_approval::claims_pending_approval;
pub use config::config;
pub use drawing::drawing;
pub use evaluate::evaluate;
pub use ready::ready;
pub use round::round;
