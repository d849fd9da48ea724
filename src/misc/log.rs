/*!
Miscellaneous items related to [logging](log).

Calls to the `log` macros are made throughout the library's procedures to
help diagnose issues during development and to watch a labeller's progress
on large theories. No log implementation is provided; pair this crate with
[env_logger](https://docs.rs/env_logger) or similar.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the satisfiability pre-labeller.
    pub const SATISFIABILITY: &str = "satisfiability";

    /// Logs related to the four-boolean stability labeller.
    pub const FOURBOOL: &str = "fourbool";

    /// Logs related to the justification labeller.
    pub const JUSTIFICATION: &str = "justification";

    /// Logs related to the FQAS labeller.
    pub const FQAS: &str = "fqas";

    /// Logs related to the naive exact oracle.
    pub const NAIVE: &str = "naive";

    /// Logs related to the smallest-stable-set enumerator.
    pub const ENUMERATOR: &str = "enumerator";

    /// Logs related to the argumentation engine.
    pub const ENGINE: &str = "engine";
}
