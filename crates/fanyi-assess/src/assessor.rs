//! The engine handle every scoring operation hangs off.

use crate::tables::EquivalenceTables;

/// Answer-assessment engine bound to a set of equivalence tables.
///
/// Holds nothing but a shared reference, so it is `Copy` and can be used from
/// any number of threads at once. The scoring operations live in the
/// `equivalence`, `content`, `semantic`, `alignment` and `similarity` modules.
#[derive(Debug, Clone, Copy)]
pub struct Assessor<'t> {
    tables: &'t EquivalenceTables,
}

impl<'t> Assessor<'t> {
    /// Assessor over caller-supplied tables, e.g. a test fixture.
    pub const fn new(tables: &'t EquivalenceTables) -> Self {
        Self { tables }
    }

    /// The tables this assessor consults.
    pub const fn tables(&self) -> &'t EquivalenceTables {
        self.tables
    }
}

impl Assessor<'static> {
    /// Assessor over the process-wide standard tables.
    pub fn standard() -> Self {
        Self::new(EquivalenceTables::standard())
    }
}

impl Default for Assessor<'static> {
    fn default() -> Self {
        Self::standard()
    }
}
