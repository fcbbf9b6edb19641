pub mod engine;
pub use engine::*;

pub mod estimate;
pub use estimate::*;

pub mod estimator;
pub use estimator::*;

pub mod request;
pub use request::*;
