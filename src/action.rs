//! The closed set of service-management actions.
//!
//! Every init-system family phrases these differently, but the abstract
//! vocabulary is fixed: whatever backend is active, callers always ask for
//! one of the actions below.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// An abstract service-management action.
///
/// The external spelling is snake_case (`is_enabled`), which is also the
/// serde representation; backends map it onto their own verb grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Start,
    Stop,
    Restart,
    Condrestart,
    Status,
    Enable,
    Disable,
    IsEnabled,
    List,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 9] = [
        Action::Start,
        Action::Stop,
        Action::Restart,
        Action::Condrestart,
        Action::Status,
        Action::Enable,
        Action::Disable,
        Action::IsEnabled,
        Action::List,
    ];

    /// The snake_case name used at string boundaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Restart => "restart",
            Action::Condrestart => "condrestart",
            Action::Status => "status",
            Action::Enable => "enable",
            Action::Disable => "disable",
            Action::IsEnabled => "is_enabled",
            Action::List => "list",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ServiceError::UnsupportedAction {
                action: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_variant() {
        assert_eq!(Action::ALL.len(), 9);
    }

    #[test]
    fn roundtrip_through_str() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn is_enabled_spelling() {
        assert_eq!(Action::IsEnabled.as_str(), "is_enabled");
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = "reload".parse::<Action>().unwrap_err();
        assert!(matches!(err, ServiceError::UnsupportedAction { .. }));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Action::IsEnabled).unwrap();
        assert_eq!(json, "\"is_enabled\"");
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Action::IsEnabled);
    }
}
