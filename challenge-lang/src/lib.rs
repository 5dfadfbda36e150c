//! Crate for managing the engines, the languages a challenge can be solved in.
//!
//! An [`Engine`] tells which file must be present in a challenge directory for the engine to claim
//! it, and how the solution in that file is executed: either by spawning an external program or
//! by calling a function inside this process.
//!
//! The entry point of this crate is [`EngineRegistry`], an ordered list of engines that is able to
//! detect which engine owns a directory.
//!
//! # Example
//!
//! ```
//! use challenge_lang::EngineRegistry;
//!
//! let engine = EngineRegistry::builtin().from_name("shell").expect("unknown engine");
//! assert_eq!(engine.entry_file, "main.sh");
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod engine;
mod engines;

pub use engine::{Engine, EngineKind, EntryPoint, OutputSink};

use std::path::Path;
use std::sync::Arc;

/// Ordered collection of engines. When asked which engine owns a directory, the first declared
/// engine whose entry file exists wins.
#[derive(Debug, Clone, Default)]
pub struct EngineRegistry {
    engines: Vec<Arc<Engine>>,
}

impl EngineRegistry {
    /// Make a registry with the provided engines, in this order.
    pub fn new(engines: Vec<Engine>) -> EngineRegistry {
        EngineRegistry {
            engines: engines.into_iter().map(Arc::new).collect(),
        }
    }

    /// The registry with all the built-in engines.
    ///
    /// The commands of the engines are read from the environment the first time this is called.
    pub fn builtin() -> &'static EngineRegistry {
        &BUILTIN_REGISTRY
    }

    /// Add an engine at the end of the registry.
    pub fn register(&mut self, engine: Engine) -> &mut Self {
        self.engines.push(Arc::new(engine));
        self
    }

    /// All the engines, in declaration order.
    pub fn engines(&self) -> &[Arc<Engine>] {
        &self.engines
    }

    /// Find the engine that owns `dir`: the first one whose entry file exists inside it.
    ///
    /// If a directory contains the entry files of more than one engine, the engine declared first
    /// is returned.
    pub fn lookup<P: AsRef<Path>>(&self, dir: P) -> Option<Arc<Engine>> {
        let dir = dir.as_ref();
        let engine = self.engines.iter().find(|engine| engine.claims(dir))?;
        trace!("{} is claimed by {}", dir.display(), engine.name);
        Some(engine.clone())
    }

    /// Search the engine with the specified name.
    pub fn from_name<S: AsRef<str>>(&self, name: S) -> Option<Arc<Engine>> {
        self.engines
            .iter()
            .find(|engine| engine.name == name.as_ref())
            .cloned()
    }
}

lazy_static! {
    /// The singleton instance of the built-in registry.
    static ref BUILTIN_REGISTRY: EngineRegistry = EngineRegistry::new(vec![
        // order matters when a directory has more than one entry file
        engines::javascript::engine(),
        engines::shell::engine(),
        engines::haskell::engine(),
        engines::python::engine(),
    ]);
}
