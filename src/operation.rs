use crate::traits::Fact;

/// The arithmetic operations that can be drilled.
#[derive(Debug, PartialEq, Eq, Copy, Clone, clap::ValueEnum)]
pub enum Operation {
    #[value(name = "add")]
    Addition,
    #[value(name = "sub")]
    Subtraction,
    #[value(name = "mul")]
    Multiplication,
}

impl Operation {
    /// Whether `a OP b` is a question we want to ask. Subtraction stays out of the negatives.
    pub fn valid(&self, a: u8, b: u8) -> bool {
        match self {
            Operation::Subtraction => a >= b,
            Operation::Addition | Operation::Multiplication => true,
        }
    }

    pub fn result(&self, a: u8, b: u8) -> i32 {
        let (a, b) = (a as i32, b as i32);
        match self {
            Operation::Addition => a + b,
            Operation::Subtraction => a - b,
            Operation::Multiplication => a * b,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "*",
        }
    }

    /// The text shown when asking this fact.
    pub fn prompt(&self, fact: &Fact) -> String {
        format!("{} {} {} = ", fact.a, self.symbol(), fact.b)
    }
}
