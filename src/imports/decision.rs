use crate::reference::Reference;

/// What a table or scope layer says about printing a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Print the simple name.
    Simple,
    /// Print the fully qualified name.
    Qualified,
    /// No opinion; ask the next layer.
    Undecided,
}

impl Decision {
    pub fn is_decided(self) -> bool {
        !matches!(self, Decision::Undecided)
    }

    /// Keep a decided answer, otherwise ask `next`.
    #[inline]
    pub fn or_else(self, next: impl FnOnce() -> Decision) -> Decision {
        match self {
            Decision::Undecided => next(),
            decided => decided,
        }
    }

    /// The text to print for `reference`, or `None` while undecided.
    pub fn render(self, reference: &Reference) -> Option<String> {
        match self {
            Decision::Simple => Some(reference.simple_name().to_string()),
            Decision::Qualified if reference.is_base_type() => {
                Some(reference.simple_name().to_string())
            }
            Decision::Qualified => Some(reference.fully_qualified_name().to_string()),
            Decision::Undecided => None,
        }
    }
}
