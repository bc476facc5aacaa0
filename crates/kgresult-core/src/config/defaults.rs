//! Default values for kgresult configuration.

use crate::encoder::Policy;

/// Encoder policy used when none is configured.
pub const DEFAULT_POLICY: Policy = Policy::Complex;

/// Whether output is pretty-printed by default.
pub const DEFAULT_PRETTY: bool = false;

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "kgresult.toml";

/// Directory under the user config dir holding `config.toml`.
pub const USER_CONFIG_DIR: &str = "kgresult";

/// Environment variable overriding the encoder policy.
pub const ENV_POLICY: &str = "KGRESULT_POLICY";

/// Environment variable overriding pretty-printing.
pub const ENV_PRETTY: &str = "KGRESULT_PRETTY";
