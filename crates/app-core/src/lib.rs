pub mod catalog;
pub mod constants;
pub mod pricing;
pub mod state;
pub mod types;
pub mod zones;

pub use catalog::*;
pub use constants::*;
pub use pricing::*;
pub use state::*;
pub use types::*;
pub use zones::*;
