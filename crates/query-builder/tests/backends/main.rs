//! Translator contract tests
//!
//! Two small backends exercise the builder end to end: one renders a
//! parameterized SQL statement from string fragments, the other builds a
//! document-store filter from JSON fragments.
