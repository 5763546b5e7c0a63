pub mod builder;
pub mod config;
pub mod form;
pub mod logging;

pub use builder::{build, build_form, BuildError, PrefilledUrl};
pub use form::{Entry, FormSpec};
