use super::CommandGenerator;
use crate::action::Action;
use crate::error::ServiceResult;

/// Command family for systemd hosts.
///
/// Every per-service action is the uniform `systemctl <verb> <name>.service`;
/// the only irregular verbs are `is-enabled` (hyphenated where the abstract
/// action is `is_enabled`) and the service-less listing form.
pub struct Systemd;

impl Systemd {
    fn verb(action: Action) -> &'static str {
        match action {
            Action::IsEnabled => "is-enabled",
            other => other.as_str(),
        }
    }
}

impl CommandGenerator for Systemd {
    fn name(&self) -> &'static str {
        "systemd"
    }

    fn supports(&self, _action: Action) -> bool {
        true
    }

    fn command(&self, action: Action, service: &str) -> ServiceResult<Vec<String>> {
        let argv = match action {
            Action::List => vec![
                "systemctl".to_string(),
                "list-unit-files".to_string(),
                "--type=service".to_string(),
            ],
            other => vec![
                "systemctl".to_string(),
                Self::verb(other).to_string(),
                format!("{}.service", service),
            ],
        };
        Ok(argv)
    }
}
