//! # challenge-runner
//!
//! This is both an application and a library, the library can be used to achieve the same
//! functionalities of the `challenge` binary inside your application.

#[macro_use]
extern crate log;

pub mod engines;
pub mod error;
pub mod gen_autocompletion;
pub mod init;
pub mod local;
pub mod opt;
pub mod state;

pub use engines::*;
pub use gen_autocompletion::*;
pub use init::*;
pub use local::*;
pub use opt::*;
