use crate::operation::Operation;
use crate::traits::Fact;

/// Smallest operand in a fact table.
pub const OPERAND_MIN: u8 = 1;
/// Largest operand in a fact table.
pub const OPERAND_MAX: u8 = 10;

/// Creates the fact tables for one operation.
#[derive(Debug, Copy, Clone)]
pub struct TableGenerator {
    operation: Operation,
}

impl TableGenerator {
    pub fn new(operation: Operation) -> Self {
        TableGenerator { operation }
    }

    /// All valid facts with `a` as first operand, ascending by second operand.
    pub fn table(&self, a: u8) -> Vec<Fact> {
        (OPERAND_MIN..=OPERAND_MAX)
            .filter(|b| self.operation.valid(a, *b))
            .map(|b| Fact::new(a, b))
            .collect::<_>()
    }

    /// Concatenated tables for the given first operands, duplicates removed and sorted.
    pub fn combinations(&self, values: &[u8]) -> Vec<Fact> {
        let mut values = values.to_vec();
        values.sort_unstable();
        values.dedup();
        values.iter().flat_map(|a| self.table(*a)).collect::<_>()
    }
}
