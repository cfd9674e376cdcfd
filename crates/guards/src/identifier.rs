//! UUID guards

use uuid::Uuid;

use crate::foundation::{CallSite, GuardErrorKind, GuardResult};

/// Validity checks for [`Uuid`].
///
/// # Examples
///
/// ```
/// use guards::prelude::*;
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// let err = id.ensure_not_empty(call_site!(id)).unwrap_err();
/// assert!(err.is_validation());
/// ```
pub trait IdentifierGuards: Sized {
    /// Succeeds iff the identifier is not the nil UUID.
    fn ensure_not_empty(self, site: CallSite) -> GuardResult<Self>;

    /// Succeeds iff the identifier's version field is 7 (time-ordered).
    fn ensure_version7(self, site: CallSite) -> GuardResult<Self>;
}

impl IdentifierGuards for Uuid {
    fn ensure_not_empty(self, site: CallSite) -> GuardResult<Self> {
        if !self.is_nil() {
            return Ok(self);
        }
        Err(site
            .reject(GuardErrorKind::Validation, |parameter, method| {
                format!(
                    "Ongeldige waarde voor Guid {parameter} in methode {method}. Guid mag niet Empty zijn."
                )
            })
            .with_param("actual", self))
    }

    fn ensure_version7(self, site: CallSite) -> GuardResult<Self> {
        let version = self.get_version_num();
        if version == 7 {
            return Ok(self);
        }
        Err(site
            .reject(GuardErrorKind::InvalidFormat, |parameter, method| {
                format!(
                    "Ongeldige Guid 'version {version}' voor {parameter} in methode {method}. Guid moet versie 7 zijn."
                )
            })
            .with_param("version", version)
            .with_param("actual", self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call_site;

    #[test]
    fn ensure_not_empty_accepts_generated_ids() {
        let random = Uuid::new_v4();
        let ordered = Uuid::now_v7();
        assert_eq!(random.ensure_not_empty(call_site!(random)).unwrap(), random);
        assert_eq!(ordered.ensure_not_empty(call_site!(ordered)).unwrap(), ordered);
    }

    #[test]
    fn ensure_not_empty_rejects_nil() {
        let id = Uuid::nil();
        let error = id.ensure_not_empty(call_site!(id)).unwrap_err();
        assert!(error.is_validation());
        assert!(error.message.contains("Ongeldige waarde"));
        assert!(error.message.contains("ensure_not_empty_rejects_nil"));
        assert!(error.message.contains("Empty"));

        let zeroed = Uuid::from_u128(0);
        assert!(zeroed.ensure_not_empty(call_site!(zeroed)).is_err());
    }

    #[test]
    fn ensure_version7_accepts_v7() {
        let id = Uuid::now_v7();
        assert_eq!(id.ensure_version7(call_site!(id)).unwrap(), id);
    }

    #[test]
    fn ensure_version7_reports_actual_version() {
        let random = Uuid::new_v4();
        let error = random.ensure_version7(call_site!(random)).unwrap_err();
        assert!(error.is_invalid_format());
        assert!(error.message.contains("Ongeldige Guid"));
        assert!(error.message.contains("version 4"));
        assert!(error.message.contains("ensure_version7_reports_actual_version"));
        assert!(error.message.contains("moet versie 7 zijn"));
        assert_eq!(error.param("version"), Some("4"));

        let nil = Uuid::nil();
        let error = nil.ensure_version7(call_site!(nil)).unwrap_err();
        assert!(error.message.contains("version 0"));
    }
}
