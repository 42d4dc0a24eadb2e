use crate::errors::AppError;

/// Reconcile the district a caller asked for against the one their profile
/// permits. Branches are evaluated in order and every input pair reaches
/// exactly one of them:
///
/// 1. nothing requested: limit to the configured facility (which may itself
///    be unrestricted),
/// 2. no facility restriction on the caller: give them what they asked for,
/// 3. asking for the allowed facility,
/// 4. anything else is denied.
///
/// Equality is strict; a descendant unit of the permitted one is still
/// denied.
pub fn resolve_district(
    requested: Option<&str>,
    permitted: Option<&str>,
) -> Result<Option<String>, AppError> {
    match (requested, permitted) {
        (None, _) => Ok(permitted.map(str::to_string)),
        (Some(requested), None) => Ok(Some(requested.to_string())),
        (Some(requested), Some(permitted)) if requested == permitted => {
            Ok(Some(requested.to_string()))
        }
        _ => Err(AppError::forbidden("Insufficient privileges")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_request_falls_back_to_permitted() {
        assert_eq!(resolve_district(None, Some("north")).unwrap(), Some("north".to_string()));
        assert_eq!(resolve_district(None, None).unwrap(), None);
    }

    #[test]
    fn unrestricted_caller_gets_what_they_ask_for() {
        assert_eq!(
            resolve_district(Some("south"), None).unwrap(),
            Some("south".to_string())
        );
    }

    #[test]
    fn matching_districts_pass() {
        assert_eq!(
            resolve_district(Some("north"), Some("north")).unwrap(),
            Some("north".to_string())
        );
    }

    #[test]
    fn mismatched_districts_deny() {
        let err = resolve_district(Some("south"), Some("north")).unwrap_err();
        match err {
            AppError::Forbidden(message) => assert_eq!(message, "Insufficient privileges"),
            other => panic!("expected forbidden, got {other:?}"),
        }
    }

    #[test]
    fn containment_is_not_equality() {
        // scoping is deliberately narrow: a sub-unit of the permitted
        // facility does not match
        assert!(resolve_district(Some("north/clinic-7"), Some("north")).is_err());
    }

    #[test]
    fn deterministic_over_repeated_calls() {
        for _ in 0..3 {
            assert_eq!(
                resolve_district(Some("east"), Some("east")).unwrap(),
                Some("east".to_string())
            );
            assert!(resolve_district(Some("east"), Some("west")).is_err());
        }
    }
}
