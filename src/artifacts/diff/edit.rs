use std::fmt::Display;

/// One line of a rendered edit script, carrying the element it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    /// Whether the edit consumes an element of the old sequence
    pub fn in_old(&self) -> bool {
        !matches!(self, Edit::Insert { .. })
    }

    /// Whether the edit consumes an element of the new sequence
    pub fn in_new(&self) -> bool {
        !matches!(self, Edit::Delete { .. })
    }

    pub(crate) fn marker(&self) -> char {
        match self {
            Edit::Delete { .. } => '-',
            Edit::Insert { .. } => '+',
            Edit::Equal { .. } => ' ',
        }
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.marker(), self.value())
    }
}
