//! # valgeo
//!
//! A library for enumerating and evaluating the valence geometry terms of a
//! molecular structure: bond lengths, valence angles, dihedral (torsion)
//! angles, and Wilson out-of-plane angles.
//!
//! Given a structure (atoms with element symbols and 3D coordinates) and its
//! explicit bond connectivity, the library derives the complete set of terms
//! from the bond graph — or parses a user-written term specification — then
//! computes each term's scalar value and renders the results as grouped text
//! tables and as row records suitable for external tabular storage.
//!
//! ## Architecture
//!
//! The crate follows a strict layered design:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure`, `Atom`,
//!   `Bond`) and pure utilities (element data, index types).
//!
//! - **[`analysis`]: The Logic Core.** Term enumeration from connectivity,
//!   specification parsing, geometry evaluation, and the configuration surface
//!   controlling an analysis pass.
//!
//! - **[`report`]: The Presentation Layer.** Element-symbol term labels,
//!   grouped text reports, and `ResultTable` row records with CSV export.
//!
//! - **[`workflows`]: The Public API.** The single entry point
//!   [`workflows::analyze::run`] tying the layers together: structure in,
//!   evaluated terms, text report, and result tables out.

pub mod analysis;
pub mod core;
pub mod report;
pub mod workflows;
