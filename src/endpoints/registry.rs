//! Start-up validation of the endpoint table.

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::endpoints::{placeholders, Endpoint, REGISTRY};

/// A defect in the endpoint table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The table does not have one entry per endpoint.
    #[error("Endpoint registry has {entries} entries for {endpoints} endpoints")]
    SizeMismatch {
        /// Number of registry entries.
        entries: usize,
        /// Number of endpoint variants.
        endpoints: usize,
    },

    /// An entry is out of declaration order.
    #[error("Registry slot {index} holds {found}, expected {expected}")]
    OutOfOrder {
        /// The slot index.
        index: usize,
        /// The endpoint found in the slot.
        found: &'static str,
        /// The endpoint expected in the slot.
        expected: &'static str,
    },

    /// A template is not an absolute API path.
    #[error("Endpoint {endpoint} has template '{template}' outside /api/")]
    BadTemplate {
        /// The endpoint name.
        endpoint: &'static str,
        /// The offending template.
        template: &'static str,
    },

    /// A template placeholder has no matching identifier declaration, or a
    /// declared identifier never appears in the template.
    #[error("Endpoint {endpoint} declares identifiers {declared:?} but its template uses {used:?}")]
    IdentifierMismatch {
        /// The endpoint name.
        endpoint: &'static str,
        /// Identifiers declared on the entry.
        declared: Vec<&'static str>,
        /// Placeholders found in the template.
        used: Vec<&'static str>,
    },
}

static VALIDATION: Lazy<Result<(), RegistryError>> = Lazy::new(check_registry);

/// Validates the endpoint table.
///
/// The check runs once per process; later calls return the cached outcome.
///
/// # Errors
///
/// Returns the first [`RegistryError`] found.
pub fn validate_registry() -> Result<(), RegistryError> {
    VALIDATION.clone()
}

fn check_registry() -> Result<(), RegistryError> {
    if REGISTRY.len() != Endpoint::ALL.len() {
        return Err(RegistryError::SizeMismatch {
            entries: REGISTRY.len(),
            endpoints: Endpoint::ALL.len(),
        });
    }

    for (index, (entry, expected)) in REGISTRY.iter().zip(Endpoint::ALL).enumerate() {
        if entry.endpoint != *expected || *expected as usize != index {
            return Err(RegistryError::OutOfOrder {
                index,
                found: entry.endpoint.as_str(),
                expected: expected.as_str(),
            });
        }

        if !entry.template.starts_with("/api/") {
            return Err(RegistryError::BadTemplate {
                endpoint: entry.endpoint.as_str(),
                template: entry.template,
            });
        }

        let used = placeholders(entry.template);
        if used.as_slice() != entry.ids {
            return Err(RegistryError::IdentifierMismatch {
                endpoint: entry.endpoint.as_str(),
                declared: entry.ids.to_vec(),
                used,
            });
        }
    }

    tracing::debug!("Validated {} admin API endpoints", REGISTRY.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_valid() {
        assert_eq!(validate_registry(), Ok(()));
    }

    #[test]
    fn test_validation_is_cached() {
        let first = validate_registry();
        let second = validate_registry();
        assert_eq!(first, second);
    }

    #[test]
    fn test_registry_error_messages() {
        let error = RegistryError::BadTemplate {
            endpoint: "GetGift",
            template: "gifts/{id}",
        };
        assert!(error.to_string().contains("gifts/{id}"));

        let error = RegistryError::IdentifierMismatch {
            endpoint: "GetGift",
            declared: vec!["id"],
            used: vec![],
        };
        assert!(error.to_string().contains("GetGift"));
    }
}
