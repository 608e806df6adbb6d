use crate::operation::Operation;
use crate::recorder::Tally;
use crate::traits::*;
use log::{debug, info, trace, warn};
use std::num::IntErrorKind;

/*
Implements the drill;
    Get question from the selector
    Repeat until answered right:
        Clear screen, show feedback and stats
        Ask, read an answer
            quit token -> stop
            not a number -> ask again, not scored
            number -> score it, wrong ones get asked again
    Go to get question.
*/

/// Answer that ends the session, compared case insensitive.
pub const QUIT_ANSWER: &str = "q";
pub const CORRECT_SIGN: &str = "\u{2713} Yes!";
pub const INCORRECT_SIGN: &str = "\u{2717} No";

/// Why a session stopped.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SessionEnd {
    /// The quit answer was given.
    Quit,
    /// Ctrl-C or end of input.
    Interrupted,
    /// The selector had nothing to ask.
    NoQuestions,
}

/// Outcome of asking a single question once.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum Asked {
    Right,
    Wrong,
    Quit,
    Interrupted,
}

pub struct Training<C: Console> {
    operation: Operation,
    selector: Box<dyn Selector>,
    tally: Tally,
    feedback: String,
    console: C,
}

impl<C: Console> Training<C> {
    pub fn new(operation: Operation, selector: Box<dyn Selector>, console: C) -> Self {
        Training {
            operation,
            selector,
            tally: Tally::new(),
            feedback: format!(
                "Welcome! To quit the game, answer '{}' to any question",
                QUIT_ANSWER
            ),
            console,
        }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// The message shown above the next question.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Keep asking questions until the user quits or interrupts.
    pub fn run(&mut self) -> Result<SessionEnd> {
        info!("starting {:?} drill", self.operation);
        let end = self.drill()?;
        if end == SessionEnd::Interrupted {
            self.console.write_line("")?;
        }
        info!(
            "session ended ({end:?}), {} right, {} wrong",
            self.tally.right(),
            self.tally.wrong()
        );
        Ok(end)
    }

    fn drill(&mut self) -> Result<SessionEnd> {
        loop {
            let fact = match self.selector.get_question() {
                Some(fact) => fact,
                None => {
                    warn!("no questions to ask");
                    return Ok(SessionEnd::NoQuestions);
                }
            };
            trace!("asking {fact:?}");

            // Repeat the question until it's right or we have to stop.
            loop {
                self.console.clear()?;
                self.console.write_line(&self.feedback)?;
                self.console.write_line(&self.tally.stats())?;
                match self.ask(&fact)? {
                    Asked::Right => break,
                    Asked::Wrong => continue,
                    Asked::Quit => return Ok(SessionEnd::Quit),
                    Asked::Interrupted => return Ok(SessionEnd::Interrupted),
                }
            }
        }
    }

    fn ask(&mut self, fact: &Fact) -> Result<Asked> {
        let expected = self.operation.result(fact.a, fact.b);
        let prompt = self.operation.prompt(fact);
        loop {
            let line = match self.console.read_line(&prompt)? {
                Input::Line(line) => line,
                Input::Interrupted => return Ok(Asked::Interrupted),
            };
            let answer = line.trim();
            if answer.eq_ignore_ascii_case(QUIT_ANSWER) {
                return Ok(Asked::Quit);
            }
            // Numbers too large to hold are still numbers, and wrong.
            let value = match answer.parse::<i64>() {
                Ok(value) => Some(value),
                Err(e)
                    if matches!(
                        e.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    ) =>
                {
                    None
                }
                Err(_) => {
                    debug!("ignoring non-numeric answer {answer:?}");
                    continue;
                }
            };
            let correct = value == Some(i64::from(expected));
            debug!("{prompt}{answer}: {}", if correct { "right" } else { "wrong" });
            self.tally.record(correct);
            if correct {
                self.feedback = CORRECT_SIGN.to_owned();
                return Ok(Asked::Right);
            }
            self.feedback = INCORRECT_SIGN.to_owned();
            return Ok(Asked::Wrong);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::ShuffledSelector;
    use crate::console::LineConsole;
    use crate::table::TableGenerator;
    use std::io::Cursor;

    /// Hands out the facts in order, once.
    #[derive(Debug)]
    struct FixedSelector(Vec<Fact>);

    impl Selector for FixedSelector {
        fn get_question(&mut self) -> Option<Fact> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    type TestConsole = LineConsole<Cursor<String>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        LineConsole::new(Cursor::new(input.to_owned()), vec![])
    }

    fn fixed(operation: Operation, facts: &[(u8, u8)], input: &str) -> Training<TestConsole> {
        let facts = facts.iter().map(|(a, b)| Fact::new(*a, *b)).collect();
        Training::new(operation, Box::new(FixedSelector(facts)), console(input))
    }

    fn output(training: &Training<TestConsole>) -> String {
        String::from_utf8_lossy(training.console().output()).into_owned()
    }

    #[test]
    fn test_quit() {
        for input in ["q\n", "Q\n", "  q \n"] {
            let mut training = fixed(Operation::Addition, &[(2, 3)], input);
            assert_eq!(training.run().unwrap(), SessionEnd::Quit);
            assert_eq!(*training.tally(), Tally::new());
        }
    }

    #[test]
    fn test_quit_keeps_counts() {
        let mut training = fixed(Operation::Addition, &[(2, 3), (4, 4)], "5\n7\nq\n");
        assert_eq!(training.run().unwrap(), SessionEnd::Quit);
        assert_eq!(training.tally().right(), 1);
        assert_eq!(training.tally().wrong(), 1);
        assert_eq!(training.feedback(), INCORRECT_SIGN);
    }

    #[test]
    fn test_wrong_answer_asks_again() {
        let mut training = fixed(Operation::Addition, &[(2, 3), (4, 4)], "1\n5\n8\n");
        assert_eq!(training.run().unwrap(), SessionEnd::NoQuestions);
        assert_eq!(training.tally().right(), 2);
        assert_eq!(training.tally().wrong(), 1);
        assert_eq!(training.feedback(), CORRECT_SIGN);

        let out = output(&training);
        assert_eq!(out.matches("2 + 3 = ").count(), 2);
        assert_eq!(out.matches("4 + 4 = ").count(), 1);
        assert!(out.contains(INCORRECT_SIGN));
        assert!(out.contains("Right:          0 (0.0%)\nWrong:          1 (100.0%)"));
    }

    #[test]
    fn test_non_numeric_not_scored() {
        let mut training = fixed(Operation::Subtraction, &[(9, 4)], "abc\n\n5\n");
        assert_eq!(training.run().unwrap(), SessionEnd::NoQuestions);
        assert_eq!(training.tally().right(), 1);
        assert_eq!(training.tally().wrong(), 0);
        // Re-asked without showing the status again.
        let out = output(&training);
        assert_eq!(out.matches("9 - 4 = ").count(), 3);
        assert_eq!(out.matches("Welcome!").count(), 1);
    }

    #[test]
    fn test_invalid_utf8_not_scored() {
        let input = Cursor::new(b"\xff\xfe\n5\n".to_vec());
        let console = LineConsole::new(input, Vec::<u8>::new());
        let facts = vec![Fact::new(2, 3)];
        let selector = Box::new(FixedSelector(facts));
        let mut training = Training::new(Operation::Addition, selector, console);
        assert_eq!(training.run().unwrap(), SessionEnd::NoQuestions);
        assert_eq!(training.tally().right(), 1);
        assert_eq!(training.tally().wrong(), 0);
    }

    #[test]
    fn test_huge_numbers_are_wrong() {
        let input = "99999999999\n-99999999999999999999999\n5\n";
        let mut training = fixed(Operation::Addition, &[(2, 3)], input);
        assert_eq!(training.run().unwrap(), SessionEnd::NoQuestions);
        assert_eq!(training.tally().right(), 1);
        assert_eq!(training.tally().wrong(), 2);
    }

    #[test]
    fn test_interrupted() {
        let mut training = fixed(Operation::Multiplication, &[(3, 3), (2, 2)], "9\n");
        assert_eq!(training.run().unwrap(), SessionEnd::Interrupted);
        assert_eq!(training.tally().right(), 1);
        assert!(output(&training).ends_with("2 * 2 = \n"));
    }

    #[test]
    fn test_status_shown() {
        let mut training = fixed(Operation::Addition, &[(1, 1)], "q\n");
        training.run().unwrap();
        assert_eq!(
            output(&training),
            "Welcome! To quit the game, answer 'q' to any question\n\
             Right:          0 (0.0%)\n\
             Wrong:          0 (0.0%)\n\
             1 + 1 = "
        );
    }

    #[test]
    fn test_shuffled_passes() {
        let combinations = TableGenerator::new(Operation::Subtraction).combinations(&[3]);
        let selector = ShuffledSelector::new(combinations, Some(7));
        // Every numeric answer is scored, wrong ones just keep the same question.
        let input = "0\n1\n2\n".repeat(6);
        let mut training = Training::new(Operation::Subtraction, Box::new(selector), console(&input));
        assert_eq!(training.run().unwrap(), SessionEnd::Interrupted);
        assert_eq!(training.tally().total(), 18);
        assert!(training.tally().right() >= 6);
    }
}
