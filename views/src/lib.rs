//! Client-side view logic for SupplyLine: the list filter/sort/paginate
//! pipeline shared by every resource table, and the modal workflow state
//! machine used by every mutating form.

pub mod forms;
pub mod list;
