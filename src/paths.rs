/// Directory holding the distribution's systemd unit files
pub const SYSTEMD_UNIT_DIR: &str = "/usr/lib/systemd/system";

/// Local systemd configuration directory
pub const SYSTEMD_SYSTEM_CONF_DIR: &str = "/etc/systemd/system";

/// Symlink that selects the default boot target
pub const DEFAULT_TARGET_PATH: &str = "/etc/systemd/system/default.target";
