//! Uniform service management over systemd and SysV init scripts.
//!
//! Hosts disagree on how services are started, enabled, or listed:
//! systemd phrases everything as `systemctl <verb> <name>.service`, while
//! SysV-style hosts split the vocabulary across `service` and `chkconfig`.
//! This crate translates an abstract [`Action`] plus a service name into the
//! exact command line the host's init system understands, and binds that
//! translation to injected execution and filesystem capabilities.
//!
//! The core never executes anything itself and never detects which init
//! system is present; both are the caller's concern.
//!
//! ```no_run
//! use std::sync::Arc;
//! use svclib::{InitKind, ServiceManager, ShellRunner};
//!
//! # fn main() -> anyhow::Result<()> {
//! let manager = ServiceManager::new(InitKind::Systemd, Arc::new(ShellRunner));
//! manager.restart("nginx")?;
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod command;
pub mod error;
pub mod exec;
pub mod init;
pub mod manager;
pub mod paths;
pub mod runlevel;

pub use action::Action;
pub use command::ServiceCommandGenerator;
pub use error::{ServiceError, ServiceResult};
pub use exec::{CommandRunner, RunOptions, RunResult, ShellRunner};
pub use init::{get_generator, CommandGenerator, InitKind, Systemd, SysVInit};
pub use manager::{
    Filesystem, OsFilesystem, ServiceManager, SpecificServiceManager, SystemdServiceManager,
};
pub use runlevel::{runlevel_to_target, target_to_runlevel};
