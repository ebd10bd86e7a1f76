//! Translation between SysV runlevels and systemd targets.
//!
//! The two init systems model "boot purpose" differently: SysV enumerates
//! seven runlevels (plus single-user 's'), systemd names a handful of
//! targets. The forward mapping is many-to-one (2, 3 and 4 all collapse to
//! multi-user.target); the reverse picks one canonical representative per
//! target. That asymmetry is deliberate and the round-trip guarantee only
//! holds for the five canonical pairs.

use crate::error::{ServiceError, ServiceResult};

/// Map a SysV runlevel to its systemd target.
///
/// Accepts `'0'..='6'` and `'s'`. Levels 2, 3 and 4 all map to
/// multi-user.target. Anything else is `InvalidRunlevel`.
pub fn runlevel_to_target(runlevel: char) -> ServiceResult<&'static str> {
    match runlevel {
        '0' => Ok("poweroff.target"),
        '1' | 's' => Ok("rescue.target"),
        '2' | '3' | '4' => Ok("multi-user.target"),
        '5' => Ok("graphical.target"),
        '6' => Ok("reboot.target"),
        other => Err(ServiceError::InvalidRunlevel {
            runlevel: other.to_string(),
        }),
    }
}

/// Map a canonical systemd target back to one SysV runlevel.
///
/// Only the five canonical names are accepted; multi-user.target maps to
/// '3' (not 2 or 4) and rescue.target to 's' (not 1). Anything else is
/// `InvalidTarget`.
pub fn target_to_runlevel(target: &str) -> ServiceResult<char> {
    match target {
        "poweroff.target" => Ok('0'),
        "rescue.target" => Ok('s'),
        "multi-user.target" => Ok('3'),
        "graphical.target" => Ok('5'),
        "reboot.target" => Ok('6'),
        other => Err(ServiceError::InvalidTarget {
            target: other.to_string(),
        }),
    }
}
