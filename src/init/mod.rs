mod systemd;
mod sysvinit;

pub use systemd::Systemd;
pub use sysvinit::SysVInit;

use std::str::FromStr;

use crate::action::Action;
use crate::error::{ServiceError, ServiceResult};

/// Trait for init-system command families (systemd, SysV init).
///
/// Implementations are pure: they phrase a command as argv tokens and never
/// execute anything. Token order and spelling are a wire contract with the
/// external tool (`systemctl`, `service`, `chkconfig`) and must match its
/// CLI grammar exactly.
pub trait CommandGenerator: Send + Sync {
    /// Name of the init system
    fn name(&self) -> &'static str;

    /// Whether this family can phrase the given action at all.
    fn supports(&self, action: Action) -> bool;

    /// Build the argv for an action against a service.
    ///
    /// The service name is used verbatim; callers keep any namespace prefix
    /// (e.g. "boot.lldpad") intact. Actions outside the family's set fail
    /// with `UnsupportedAction`.
    fn command(&self, action: Action, service: &str) -> ServiceResult<Vec<String>>;
}

/// Available init-system backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitKind {
    #[default]
    Systemd,
    SysVInit,
}

impl InitKind {
    pub fn create(self) -> Box<dyn CommandGenerator> {
        match self {
            InitKind::Systemd => Box::new(Systemd),
            InitKind::SysVInit => Box::new(SysVInit),
        }
    }

    /// The identifier used at string boundaries ("systemd" / "init").
    pub fn as_str(&self) -> &'static str {
        match self {
            InitKind::Systemd => "systemd",
            InitKind::SysVInit => "init",
        }
    }
}

impl FromStr for InitKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "systemd" => Ok(InitKind::Systemd),
            "init" => Ok(InitKind::SysVInit),
            other => Err(ServiceError::UnknownInitSystem {
                name: other.to_string(),
            }),
        }
    }
}

pub fn get_generator(kind: InitKind) -> Box<dyn CommandGenerator> {
    kind.create()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initkind_default_is_systemd() {
        assert_eq!(InitKind::default(), InitKind::Systemd);
    }

    #[test]
    fn create_systemd() {
        let generator = InitKind::Systemd.create();
        assert_eq!(generator.name(), "systemd");
    }

    #[test]
    fn create_sysvinit() {
        let generator = InitKind::SysVInit.create();
        assert_eq!(generator.name(), "init");
    }

    #[test]
    fn boundary_strings_parse() {
        assert_eq!("systemd".parse::<InitKind>().unwrap(), InitKind::Systemd);
        assert_eq!("init".parse::<InitKind>().unwrap(), InitKind::SysVInit);
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "upstart".parse::<InitKind>().unwrap_err();
        assert!(matches!(err, ServiceError::UnknownInitSystem { .. }));
    }

    #[test]
    fn identifiers_round_trip() {
        for kind in [InitKind::Systemd, InitKind::SysVInit] {
            assert_eq!(kind.as_str().parse::<InitKind>().unwrap(), kind);
        }
    }
}
