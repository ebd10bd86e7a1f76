//! Allowed-subset wrapper around a command generator.

use crate::action::Action;
use crate::error::{ServiceError, ServiceResult};
use crate::init::CommandGenerator;

/// A command generator restricted to an allowed set of actions.
///
/// Wraps one [`CommandGenerator`] and gatekeeps which actions callers may
/// phrase through it. An excluded action fails with `NoSuchOperation` before
/// the generator is ever consulted; an allowed action the family itself
/// cannot phrase (SysV `list`) still fails with `UnsupportedAction` from the
/// generator. Stateless after construction.
pub struct ServiceCommandGenerator {
    generator: Box<dyn CommandGenerator>,
    allowed: Vec<Action>,
}

impl ServiceCommandGenerator {
    /// Wrap a generator with the full action set allowed.
    pub fn new(generator: Box<dyn CommandGenerator>) -> Self {
        Self::with_allowed(generator, Action::ALL)
    }

    /// Wrap a generator with an explicit allowed subset.
    pub fn with_allowed(
        generator: Box<dyn CommandGenerator>,
        allowed: impl IntoIterator<Item = Action>,
    ) -> Self {
        Self {
            generator,
            allowed: allowed.into_iter().collect(),
        }
    }

    /// The same wrapper with one action removed from the allowed set.
    pub fn without(mut self, action: Action) -> Self {
        self.allowed.retain(|a| *a != action);
        self
    }

    /// The allowed actions, in the order given at construction.
    pub fn actions(&self) -> &[Action] {
        &self.allowed
    }

    /// Whether the action is in the allowed set.
    pub fn allows(&self, action: Action) -> bool {
        self.allowed.contains(&action)
    }

    /// Name of the wrapped init system.
    pub fn init_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Build the argv for an allowed action against a service.
    pub fn command(&self, action: Action, service: &str) -> ServiceResult<Vec<String>> {
        if !self.allows(action) {
            return Err(ServiceError::NoSuchOperation {
                action: action.to_string(),
            });
        }
        self.generator.command(action, service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::InitKind;

    #[test]
    fn default_allows_the_full_action_set() {
        let commands = ServiceCommandGenerator::new(InitKind::Systemd.create());
        assert_eq!(commands.actions(), Action::ALL);
    }

    #[test]
    fn systemd_grid_matches_systemctl_grammar() {
        let commands = ServiceCommandGenerator::new(InitKind::Systemd.create());
        for action in commands.actions().iter().filter(|a| **a != Action::List) {
            let argv = commands.command(*action, "fake_service").unwrap();
            let verb = if *action == Action::IsEnabled {
                "is-enabled"
            } else {
                action.as_str()
            };
            assert_eq!(argv, vec!["systemctl", verb, "fake_service.service"]);
        }
    }

    #[test]
    fn sysvinit_grid_matches_service_and_chkconfig_grammar() {
        let commands = ServiceCommandGenerator::new(InitKind::SysVInit.create());
        for action in commands.actions().iter().filter(|a| **a != Action::List) {
            let argv = commands.command(*action, "fake_service").unwrap();
            let (tool, verb) = match action {
                Action::Enable => ("chkconfig", "on"),
                Action::Disable => ("chkconfig", "off"),
                Action::IsEnabled => ("chkconfig", ""),
                other => ("service", other.as_str()),
            };
            assert_eq!(argv, vec![tool, "fake_service", verb]);
        }
    }

    #[test]
    fn excluded_action_is_no_such_operation() {
        let commands =
            ServiceCommandGenerator::new(InitKind::Systemd.create()).without(Action::List);
        let err = commands.command(Action::List, "svc").unwrap_err();
        assert!(matches!(err, ServiceError::NoSuchOperation { .. }));
        assert!(!commands.allows(Action::List));
        assert_eq!(commands.actions().len(), Action::ALL.len() - 1);
    }

    #[test]
    fn allowed_but_unphrasable_is_unsupported() {
        // list stays in the default allowed set even for SysV; the family
        // itself rejects it.
        let commands = ServiceCommandGenerator::new(InitKind::SysVInit.create());
        assert!(commands.allows(Action::List));
        let err = commands.command(Action::List, "svc").unwrap_err();
        assert!(matches!(err, ServiceError::UnsupportedAction { .. }));
    }

    #[test]
    fn explicit_subset_is_honored() {
        let commands = ServiceCommandGenerator::with_allowed(
            InitKind::Systemd.create(),
            [Action::Start, Action::Stop],
        );
        assert!(commands.command(Action::Start, "svc").is_ok());
        let err = commands.command(Action::Enable, "svc").unwrap_err();
        assert!(matches!(err, ServiceError::NoSuchOperation { .. }));
    }
}
