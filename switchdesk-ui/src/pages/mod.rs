mod inventory_table;
mod not_found;

pub use inventory_table::InventoryTable;
pub use not_found::NotFound;
