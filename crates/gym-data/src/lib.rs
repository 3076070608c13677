// Operations
mod operations;
pub use operations::*;

// Models
mod plans;
pub use plans::*;

mod members;
pub use members::*;

mod forms;
pub use forms::*;
