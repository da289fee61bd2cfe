/// Header Field.
///
/// Contains a lowercase name and the combined value of every occurrence of that name.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderField {
    name: String,
    value: String,
}

impl HeaderField {
    pub(crate) const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }

    /// Returns the lowercase field name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the combined field value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Append another occurrence of the field, `value` is joined with `", "`.
    pub(crate) fn merge(&mut self, value: &str) {
        self.value.reserve(value.len() + 2);
        self.value.push_str(", ");
        self.value.push_str(value);
    }
}

impl std::fmt::Debug for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderField")
            .field(&self.name)
            .field(&self.value)
            .finish()
    }
}

impl std::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
