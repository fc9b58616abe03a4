//! Response rewriting

pub mod injection;

pub use injection::inject_output;
