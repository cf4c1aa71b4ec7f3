//! In-memory merchant API credential.

use std::fmt;

use super::token::{mask_token, normalize_token, token_fingerprint};

/// A normalized, non-empty merchant API token.
///
/// The token lives only in process memory. `Debug` and `Display` render the
/// masked preview so the value can be logged or printed without leaking it;
/// use [`Credential::expose_secret`] only when building the request header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// Normalize raw user input into a credential.
    ///
    /// Returns `None` when nothing meaningful remains after normalization,
    /// which callers report as "no credential supplied".
    pub fn from_raw(raw: &str) -> Option<Self> {
        let token = normalize_token(raw);
        if token.is_empty() {
            None
        } else {
            Some(Self { token })
        }
    }

    /// The bare token value.
    pub fn expose_secret(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Display-safe preview, e.g. `eyJ0eX…c_123 (len=72)`.
    pub fn masked(&self) -> String {
        mask_token(&self.token)
    }

    /// Short correlation id derived from the token hash.
    pub fn fingerprint(&self) -> String {
        token_fingerprint(&self.token)
    }

    /// Number of characters in the token.
    pub fn len(&self) -> usize {
        self.token.chars().count()
    }

    /// Always `false`; an empty credential cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("preview", &self.masked())
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sha256:{}", self.masked(), self.fingerprint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "0123456789abcdefghij";

    #[test]
    fn blank_input_is_not_a_credential() {
        assert!(Credential::from_raw("").is_none());
        assert!(Credential::from_raw(" \n\t").is_none());
        assert!(Credential::from_raw("Bearer   ").is_some_and(|c| c.expose_secret() == "Bearer"));
    }

    #[test]
    fn authorization_header_uses_normalized_token() {
        let credential = Credential::from_raw(&format!(" Bearer '{TOKEN}'\n")).unwrap();
        assert_eq!(credential.expose_secret(), TOKEN);
        assert_eq!(credential.authorization_header(), format!("Bearer {TOKEN}"));
        assert_eq!(credential.len(), TOKEN.len());
    }

    #[test]
    fn debug_and_display_never_contain_the_token() {
        let credential = Credential::from_raw(TOKEN).unwrap();
        let debug = format!("{credential:?}");
        let display = credential.to_string();

        assert!(!debug.contains(TOKEN));
        assert!(!display.contains(TOKEN));
        assert!(display.starts_with("012345…efghij (len=20) sha256:"));
    }
}
