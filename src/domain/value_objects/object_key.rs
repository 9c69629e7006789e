use object_store::path::Path as ObjectPath;

/// Key of an object in the bucket, taken verbatim from the request.
///
/// Keys are not validated here: whatever the client sent (including an empty
/// name) is forwarded to the store, which decides whether it exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Location of this key in an `object_store` backend.
    ///
    /// Reserved characters are percent-encoded per segment and empty segments
    /// are dropped, so `a//b.txt` and `a/b.txt` share one location.
    pub fn to_path(&self) -> ObjectPath {
        ObjectPath::from(self.0.as_str())
    }

    /// Recover the client-facing key from a stored location, undoing the
    /// encoding applied by [`ObjectKey::to_path`].
    pub fn from_path(path: &ObjectPath) -> Self {
        let raw = path.as_ref();
        match urlencoding::decode(raw) {
            Ok(decoded) => Self(decoded.into_owned()),
            // Not produced by to_path; report the stored name as-is
            Err(_) => Self(raw.to_string()),
        }
    }
}

impl From<String> for ObjectKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ObjectKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
