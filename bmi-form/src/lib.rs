pub mod form;
pub mod oneshot;
pub mod render;
pub mod session;

pub use oneshot::run_once;
