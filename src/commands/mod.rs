//! Subcommand handlers.
//!
//! Each file in this module corresponds to one user-facing command:
//!
//! | File          | Invocation             | Description                            |
//! |---------------|------------------------|----------------------------------------|
//! | `init.rs`     | `env-backup init`      | Scaffold an `env-backup.toml`          |
//! | `run.rs`      | `env-backup` (default) | Full backup pipeline                   |
//! | `scopes.rs`   | `env-backup scopes`    | List scopes and project counts         |

pub mod init;
pub mod run;
pub mod scopes;
