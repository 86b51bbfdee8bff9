//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form, tables, and insight surfaces. Pages own the
//! signals and pass them down as props.

pub mod insights_panel;
pub mod prediction_form;
pub mod predictions_table;
