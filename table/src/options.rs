/// Resource limits a [`Table`](crate::Table) applies while resolving lengths.
///
/// The defaults impose no limits. A limit only rejects a length prefix that
/// is larger than allowed; it does not validate anything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Largest element count a vector length prefix may declare.
    pub max_vector_len: Option<usize>,

    /// Largest byte length a string record may declare.
    pub max_string_len: Option<usize>,
}

/// Per-use overrides for [`TableOptions`].
///
/// Fields left as `None` keep the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptionsOverride {
    pub max_vector_len: Option<usize>,
    pub max_string_len: Option<usize>,
}

impl TableOptions {
    /// Apply every field set in `overrides` on top of `self`.
    pub fn override_with(&mut self, overrides: &TableOptionsOverride) {
        if let Some(max) = overrides.max_vector_len {
            self.max_vector_len = Some(max);
        }
        if let Some(max) = overrides.max_string_len {
            self.max_string_len = Some(max);
        }
    }

    /// Like [`override_with`](Self::override_with), but returns a new value.
    pub fn merge(mut self, overrides: &TableOptionsOverride) -> Self {
        self.override_with(overrides);
        self
    }
}
