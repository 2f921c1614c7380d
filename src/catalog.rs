//! Selectable type catalog and its load states.
//!
//! The catalog is fetched once per session and read by two independent
//! selection slots. "Not yet loaded" and "fetched but empty/malformed" are
//! deliberately distinct states with visibly different placeholders.

use crate::error::AppError;

/// Which selection slot a prompt belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Yours,
    Partners,
}

impl Slot {
    pub fn title(self) -> &'static str {
        match self {
            Slot::Yours => "Your type",
            Slot::Partners => "Partner's type",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Slot::Yours => "Select your type",
            Slot::Partners => "Select your partner's type",
        }
    }
}

/// The session's type catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TypeCatalog {
    /// Initial state. Also kept after a transport failure, so the user can
    /// tell "still trying" from "the service has no data"; the failure
    /// itself is reported through the status line.
    #[default]
    Loading,
    /// The service answered, but with an empty or malformed list.
    Unavailable,
    /// Loaded; treated as append-only for the rest of the session.
    Ready(Vec<String>),
}

impl TypeCatalog {
    /// Selectable options, in server order. Empty unless `Ready`.
    pub fn types(&self) -> &[String] {
        match self {
            Self::Ready(types) => types,
            _ => &[],
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Placeholder text for a selection slot when no options can be offered.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("(loading...)"),
            Self::Unavailable => Some("(no data)"),
            Self::Ready(_) => None,
        }
    }

    /// Fold a load attempt into the catalog state.
    ///
    /// Data unavailability moves to `Unavailable`; any other failure keeps
    /// the current state. The error is handed back for status reporting.
    pub fn apply_load(&mut self, result: Result<Vec<String>, AppError>) -> Option<AppError> {
        match result {
            Ok(types) => {
                *self = Self::Ready(types);
                None
            }
            Err(err @ AppError::Unavailable(_)) => {
                *self = Self::Unavailable;
                Some(err)
            }
            Err(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_loading_state() {
        assert_eq!(TypeCatalog::default(), TypeCatalog::Loading);
        assert!(!TypeCatalog::default().is_ready());
    }

    #[test]
    fn successful_load_becomes_ready() {
        let mut catalog = TypeCatalog::default();
        let err = catalog.apply_load(Ok(vec!["安定型".to_string(), "冒険型".to_string()]));
        assert!(err.is_none());
        assert!(catalog.is_ready());
        assert_eq!(catalog.types().len(), 2);
        assert_eq!(catalog.placeholder(), None);
    }

    #[test]
    fn unavailable_is_distinct_from_loading() {
        let mut catalog = TypeCatalog::default();
        let err = catalog.apply_load(Err(AppError::unavailable("no types")));
        assert!(err.is_some());
        assert_eq!(catalog, TypeCatalog::Unavailable);
        assert_ne!(
            TypeCatalog::Loading.placeholder(),
            TypeCatalog::Unavailable.placeholder()
        );
    }

    #[test]
    fn transport_failure_keeps_loading_placeholder() {
        let mut catalog = TypeCatalog::default();
        let err = catalog.apply_load(Err(AppError::transport("connection refused")));
        assert!(err.is_some());
        assert_eq!(catalog, TypeCatalog::Loading);
    }

    #[test]
    fn slots_have_distinct_prompts() {
        assert_ne!(Slot::Yours.prompt(), Slot::Partners.prompt());
    }
}
