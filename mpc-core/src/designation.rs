/// Literal prefix prepended to designations originating from simulated
/// input data. Removal is substring based, not anchored to the start.
pub const DESIGNATION_PREFIX: &str = "2011 ";

/// A minor-planet designation exactly as received from the caller.
///
/// The text is kept verbatim. No validation is performed: malformed input
/// flows through unchanged and ends up form-urlencoded in the redirect
/// target it resolves to.
///
/// # Example
/// ```
/// use mpc_core::designation::Designation;
///
/// let designation = Designation::from("2011 1001 T-2");
/// assert_eq!(designation.stripped(), "1001 T-2");
/// assert!(!designation.is_synthetic());
///
/// let designation = Designation::from("2011 12345");
/// assert_eq!(designation.stripped(), "12345");
/// assert!(designation.is_synthetic());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From, derive_more::Into, derive_more::AsRef)]
pub struct Designation(String);

impl Designation {
    /// The designation text as received, before any stripping.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The designation with every occurrence of [`DESIGNATION_PREFIX`]
    /// removed.
    ///
    /// # Example
    /// ```
    /// use mpc_core::designation::Designation;
    ///
    /// assert_eq!(Designation::from("X2011 Y").stripped(), "XY");
    /// assert_eq!(Designation::from("1998 QE2").stripped(), "1998 QE2");
    /// ```
    pub fn stripped(&self) -> String {
        self.0.replace(DESIGNATION_PREFIX, "")
    }

    /// A designation with no space left after stripping is assumed to come
    /// from simulated, non-real input data.
    pub fn is_synthetic(&self) -> bool {
        Self::stripped_is_synthetic(&self.stripped())
    }

    /// Classification of an already-stripped form.
    pub(crate) fn stripped_is_synthetic(stripped: &str) -> bool {
        !stripped.contains(' ')
    }
}

impl From<&str> for Designation {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
