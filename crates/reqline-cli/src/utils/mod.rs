pub mod color;
pub mod logging;

pub use logging::initialize_logging;
