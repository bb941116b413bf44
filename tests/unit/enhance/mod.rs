pub mod chain;
pub mod rescale;
