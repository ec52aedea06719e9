//! Lookup results.

/// Placeholder text for a missing key, for callers that want a plain string
/// back. A stored value equal to this text cannot be told apart from a miss
/// once flattened; match on [`Lookup`] when that matters.
pub const NO_DATA: &str = "==no data==";

/// Outcome of [`HashTable::get`](crate::HashTable::get).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Lookup<'a> {
    Found(&'a str),
    NotFound,
}

impl<'a> Lookup<'a> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        !self.is_found()
    }

    #[inline]
    pub fn value(self) -> Option<&'a str> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::NotFound => None,
        }
    }

    /// The stored value, or [`NO_DATA`] on a miss.
    #[inline]
    pub fn or_no_data(self) -> &'a str {
        self.value().unwrap_or(NO_DATA)
    }
}

impl<'a> From<Option<&'a str>> for Lookup<'a> {
    fn from(v: Option<&'a str>) -> Self {
        match v {
            Some(v) => Lookup::Found(v),
            None => Lookup::NotFound,
        }
    }
}

impl<'a> From<Lookup<'a>> for Option<&'a str> {
    fn from(l: Lookup<'a>) -> Self {
        l.value()
    }
}
