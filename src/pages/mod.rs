//! Routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login`/`register` are the public routes; everything else renders
//! inside the guarded app layout. The CRUD screens are one generic
//! `resource` page driven by the static tables in `resources`.

pub mod dashboard;
pub mod finance;
pub mod login;
pub mod register;
pub mod resource;
pub mod resources;
