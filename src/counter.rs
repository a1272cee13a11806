//! Call counting via shared-table wrapper instrumentation.
//!
//! A [`CallCounter`] owns the count table and hands out [`Counted`] wrappers
//! that share it. The table is pre-seeded for a fixed set of names; wrapping
//! or querying a name outside that set is an error, never an implicit
//! insert. Counts only grow through wrapper calls but can be externally
//! reset at any time, and every holder of a wrapper sees the reset.
//!
//! Sharing is single-threaded by construction: the table lives behind
//! `Rc<RefCell<..>>`, so the types are `!Send` and cross-thread use does not
//! compile.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::ui;

/// Names seeded in every new count table.
pub const SEEDED_NAMES: [&str; 3] = ["add", "mul", "div"];

type CountTable = Rc<RefCell<HashMap<String, u64>>>;

/// Owner of the count table and issuer of counting wrappers.
#[derive(Debug, Clone)]
pub struct CallCounter {
    counts: CountTable,
}

impl CallCounter {
    /// Create a counter with every seeded name at zero.
    pub fn new() -> Self {
        let table: HashMap<String, u64> = SEEDED_NAMES
            .iter()
            .map(|name| (name.to_string(), 0))
            .collect();
        Self {
            counts: Rc::new(RefCell::new(table)),
        }
    }

    /// Wrap `func` so every call bumps the entry for `name`.
    ///
    /// # Errors
    ///
    /// Fails when `name` is not a seeded key. The table never grows
    /// implicitly; an unregistered name is a programming error.
    pub fn wrap<F>(&self, name: &str, func: F) -> Result<Counted<F>> {
        if !self.counts.borrow().contains_key(name) {
            bail!(
                "unknown counter key '{}': seeded keys are {}",
                name,
                SEEDED_NAMES.join(", ")
            );
        }
        Ok(Counted {
            name: name.to_string(),
            counts: Rc::clone(&self.counts),
            inner: func,
        })
    }

    /// Current count for `name`.
    ///
    /// # Errors
    ///
    /// Fails when `name` was never seeded.
    pub fn count(&self, name: &str) -> Result<u64> {
        match self.counts.borrow().get(name) {
            Some(&n) => Ok(n),
            None => bail!("unknown counter key '{}'", name),
        }
    }

    /// Reset one entry to zero, leaving the others untouched.
    ///
    /// # Errors
    ///
    /// Fails when `name` was never seeded.
    pub fn reset(&self, name: &str) -> Result<()> {
        match self.counts.borrow_mut().get_mut(name) {
            Some(slot) => {
                *slot = 0;
                Ok(())
            }
            None => bail!("unknown counter key '{}'", name),
        }
    }

    /// Reset every entry to zero.
    pub fn reset_all(&self) {
        for slot in self.counts.borrow_mut().values_mut() {
            *slot = 0;
        }
    }

    /// Snapshot of the table.
    pub fn counts(&self) -> HashMap<String, u64> {
        self.counts.borrow().clone()
    }
}

impl Default for CallCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory form of the counter.
///
/// The returned value is both halves of the classic decorator-plus-table
/// pair: it issues wrappers through [`CallCounter::wrap`] and exposes the
/// shared table through [`CallCounter::counts`].
pub fn create_counter() -> CallCounter {
    CallCounter::new()
}

/// A wrapped binary function that counts its own invocations.
///
/// Created by [`CallCounter::wrap`]; shares the issuing counter's table.
#[derive(Clone)]
pub struct Counted<F> {
    name: String,
    counts: CountTable,
    inner: F,
}

impl<F> std::fmt::Debug for Counted<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counted")
            .field("name", &self.name)
            .field("counts", &self.counts)
            .finish_non_exhaustive()
    }
}

impl<F> Counted<F> {
    /// The table key this wrapper records under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the wrapped function, bumping and announcing the count first.
    ///
    /// The original arguments pass through unchanged, as does the result.
    pub fn call<A, B, R>(&self, a: A, b: B) -> R
    where
        F: Fn(A, B) -> R,
    {
        let updated = {
            let mut table = self.counts.borrow_mut();
            let slot = table
                .get_mut(&self.name)
                .expect("wrapped name was validated at wrap time");
            *slot += 1;
            *slot
        };

        if !ui::is_quiet() {
            println!("Function {} was called {} times", self.name.cyan(), updated);
        }

        (self.inner)(a, b)
    }
}
