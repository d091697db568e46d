//! Normalized address shape shared by every provider.

use crate::LookupError;

/// Canonical address, independent of the provider that produced it.
///
/// Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Postal code as echoed back by the provider.
    pub code: String,
    /// Street name.
    pub street: String,
    /// Neighborhood (bairro).
    pub neighborhood: String,
    /// City (localidade).
    pub city: String,
    /// State abbreviation (UF).
    pub region: String,
}

impl Address {
    /// Reject decoded bodies that do not describe an address.
    ///
    /// Wire shapes default every missing field to empty, so an error object
    /// such as `{"erro": true}` decodes cleanly. An empty `code` is what
    /// tells it apart from a real answer.
    pub fn ensure_shape(self) -> Result<Self, LookupError> {
        if self.code.is_empty() {
            return Err(LookupError::Shape);
        }
        Ok(self)
    }
}

/// An address paired with the provider that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Name of the winning provider, e.g. `"BrasilAPI"`.
    pub provider: &'static str,
    /// The normalized address.
    pub address: Address,
}
