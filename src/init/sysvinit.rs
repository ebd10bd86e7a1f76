use super::CommandGenerator;
use crate::action::Action;
use crate::error::{ServiceError, ServiceResult};

/// Command family for SysV-style init hosts.
///
/// Lifecycle actions go through `service`, boot-time toggles through
/// `chkconfig`. There is no native listing command in this family; a wrapper
/// above this generator has to supply one.
pub struct SysVInit;

impl CommandGenerator for SysVInit {
    fn name(&self) -> &'static str {
        "init"
    }

    fn supports(&self, action: Action) -> bool {
        action != Action::List
    }

    fn command(&self, action: Action, service: &str) -> ServiceResult<Vec<String>> {
        let (tool, verb) = match action {
            Action::Enable => ("chkconfig", "on"),
            Action::Disable => ("chkconfig", "off"),
            // chkconfig's query form takes no third argument; the empty
            // token keeps the 3-token argv shape and the shell collapses it.
            Action::IsEnabled => ("chkconfig", ""),
            Action::List => {
                return Err(ServiceError::UnsupportedAction {
                    action: action.to_string(),
                })
            }
            other => ("service", other.as_str()),
        };
        Ok(vec![tool.to_string(), service.to_string(), verb.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_actions_use_service() {
        for action in [
            Action::Start,
            Action::Stop,
            Action::Restart,
            Action::Condrestart,
            Action::Status,
        ] {
            let argv = SysVInit.command(action, "svc").unwrap();
            assert_eq!(argv, vec!["service", "svc", action.as_str()]);
        }
    }

    #[test]
    fn enable_and_disable_use_chkconfig() {
        assert_eq!(
            SysVInit.command(Action::Enable, "svc").unwrap(),
            vec!["chkconfig", "svc", "on"]
        );
        assert_eq!(
            SysVInit.command(Action::Disable, "svc").unwrap(),
            vec!["chkconfig", "svc", "off"]
        );
    }

    #[test]
    fn is_enabled_keeps_the_empty_token() {
        let argv = SysVInit.command(Action::IsEnabled, "svc").unwrap();
        assert_eq!(argv, vec!["chkconfig", "svc", ""]);
        assert_eq!(argv.len(), 3);
    }

    #[test]
    fn list_is_unsupported() {
        assert!(!SysVInit.supports(Action::List));
        let err = SysVInit.command(Action::List, "svc").unwrap_err();
        assert!(matches!(err, ServiceError::UnsupportedAction { .. }));
    }

    #[test]
    fn service_name_is_not_decomposed() {
        let argv = SysVInit.command(Action::Start, "boot.lldpad").unwrap();
        assert_eq!(argv, vec!["service", "boot.lldpad", "start"]);
    }
}
