use std::fmt::{Display, Formatter};

/// Renders as `Total: <sum>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Total(pub i64);

impl Display for Total {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Total: {}", self.0)
    }
}

/// Renders as `Even numbers: 2 4 6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvenNumbers<'a>(pub &'a [i64]);

impl Display for EvenNumbers<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Even numbers:")?;
        for n in self.0 {
            write!(f, " {n}")?;
        }

        Ok(())
    }
}
