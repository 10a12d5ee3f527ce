pub mod contract;
pub mod error;
pub mod execute;
pub mod matching;
pub mod models;
pub mod msg;
pub mod query;
pub mod state;
pub mod util;
