use super::{HeaderError, HeaderField, Iter, normalize_name};

/// HTTP Headers.
///
/// Fields are kept in the order their name first appeared. A request carries a handful of
/// fields, so lookup is a linear scan over the lowercase names.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fields: Vec<HeaderField>,
}

impl Headers {
    /// Create new empty [`Headers`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Returns the number of distinct field names.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no field.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over headers as lowercase name and combined value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.fields)
    }
}

// ===== Lookup =====

impl Headers {
    /// Returns the combined value for the given field name.
    ///
    /// The name is matched case-insensitively.
    ///
    /// ```rust
    /// use httpfromtcp::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.set("Content-Type", "text/html").unwrap();
    /// assert_eq!(headers.get("content-type"), Some("text/html"));
    /// assert_eq!(headers.get("CONTENT-TYPE"), Some("text/html"));
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.field(name).map(HeaderField::value)
    }

    /// Returns `true` if the map contains a value for the given field name.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    fn field(&self, name: &str) -> Option<&HeaderField> {
        let name = name.trim_ascii();
        self.fields
            .iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }
}

// ===== Mutation =====

impl Headers {
    /// Insert a header field.
    ///
    /// Surrounding whitespace of both `name` and `value` is trimmed, and `name` is stored in
    /// lowercase. If the name is already present, `value` is appended to the existing value
    /// separated by `", "`, the existing value is never overwritten.
    ///
    /// ```rust
    /// use httpfromtcp::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.set("Set-Person", "Elias").unwrap();
    /// headers.set("set-person", " Rob ").unwrap();
    /// assert_eq!(headers.get("set-person"), Some("Elias, Rob"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if the trimmed name is empty or contains a byte outside the `token`
    /// character set. Headers is left untouched on error.
    pub fn set<N: AsRef<[u8]>>(&mut self, name: N, value: &str) -> Result<(), HeaderError> {
        let name = normalize_name(name.as_ref())?;
        let value = value.trim_ascii();

        match self.fields.iter_mut().find(|field| field.name() == name) {
            Some(field) => field.merge(value),
            None => self.fields.push(HeaderField::new(name, value.to_owned())),
        }

        Ok(())
    }
}

impl std::fmt::Debug for Headers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl std::fmt::Display for Headers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for field in &self.fields {
            write!(f, "{field}\r\n")?;
        }
        Ok(())
    }
}
