pub mod deepzoom;
pub mod logger;
