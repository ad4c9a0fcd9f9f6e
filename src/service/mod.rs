//! CrudService: generic CRUD over the typed resources using the safe SQL builder.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::{require_non_empty, Validate};
