//! Details on the result of some procedure.

/// The answer to a query about whether some entity holds some card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Answer {
    /// The entity holds the card on every valuation consistent with the knowledge base.
    True,

    /// The entity holds the card on no valuation consistent with the knowledge base.
    False,

    /// The knowledge base is consistent with the entity holding the card, and with the entity not holding the card.
    Unknown,
}

impl Answer {
    /// Whether the answer is determined, either way.
    pub fn is_known(&self) -> bool {
        !matches!(self, Answer::Unknown)
    }
}

/// The marks of a detective's notepad: `Y`, `n`, and `-`.
impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "Y"),
            Self::False => write!(f, "n"),
            Self::Unknown => write!(f, "-"),
        }
    }
}
