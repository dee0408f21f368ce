/*
[INPUT]:  Public API exports for radar-relay-inspect crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod inspect;

pub use inspect::{PayloadKind, Report, Verdict, inspect_lines, inspect_payload};
