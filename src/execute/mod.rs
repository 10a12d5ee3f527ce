mod approve;
mod buy;
mod claim;
mod post_results;
mod reject;
mod set_config;
mod withdraw;

pub use approve::approve;
pub use buy::buy;
pub use claim::claim;
pub use post_results::post_results;
pub use reject::reject;
pub use set_config::set_config;
pub use withdraw::withdraw;
