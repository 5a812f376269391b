// Declares the main modules of the crate
pub mod autograd;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
pub mod value_data;

pub mod error;

// Re-export the Value type so it is reachable directly as `scalargrad_core::Value`
pub use error::ScalarGradError;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
