pub mod binding;
pub mod config;
pub mod error;
pub mod option;
pub mod program;

#[cfg(feature = "clap")]
pub mod import;

mod binder;
mod dispatch;
mod help;
mod validate;

pub(crate) mod context;
pub(crate) mod parsed_flag;

pub use binding::{Binding, Slot};
pub use config::Config;
pub use error::{Category, ConfigError, DependencyViolation, Error, OptionLabel};
pub use option::{ArityFlags, FLAG_PREFIX, Opt, OptSpec, Standalone, ValueType};
pub use program::{EntryPoint, Program, entry_point};

pub type Result<T = ()> = std::result::Result<T, error::Error>;
