use approx::relative_eq;

/// Tolerance of the approximate comparison, when none is specified.
pub const DEFAULT_EPSILON: f64 = 10e-2;

/// How the output of a solution is compared with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Comparator {
    /// The two texts must be identical.
    #[default]
    Exact,
    /// The two texts must have the same whitespace separated tokens, numbers are equal if they
    /// are within `epsilon` from each other (either absolute or relative difference).
    Approx {
        /// The maximum allowed difference between two numbers.
        epsilon: f64,
    },
}

impl Comparator {
    /// Make the comparator from the command line option: exact if no epsilon is given.
    pub fn from_epsilon(epsilon: Option<f64>) -> Comparator {
        match epsilon {
            Some(epsilon) => Comparator::Approx { epsilon },
            None => Comparator::Exact,
        }
    }

    /// Whether the `actual` output of the solution is the `expected` one.
    pub fn matches(&self, actual: &str, expected: &str) -> bool {
        match self {
            Comparator::Exact => actual == expected,
            Comparator::Approx { epsilon } => {
                let mut actual = actual.split_whitespace();
                let mut expected = expected.split_whitespace();
                loop {
                    match (actual.next(), expected.next()) {
                        (None, None) => return true,
                        (Some(a), Some(b)) if tokens_match(a, b, *epsilon) => continue,
                        _ => return false,
                    }
                }
            }
        }
    }
}

fn tokens_match(actual: &str, expected: &str, epsilon: f64) -> bool {
    if actual == expected {
        return true;
    }
    match (actual.parse::<f64>(), expected.parse::<f64>()) {
        (Ok(a), Ok(b)) => relative_eq!(a, b, epsilon = epsilon, max_relative = epsilon),
        _ => false,
    }
}
