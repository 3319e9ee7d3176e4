mod page_size_select;
mod pagination;
mod search_box;
mod switch_form;
mod switch_table;

pub use page_size_select::PageSizeSelect;
pub use pagination::Pagination;
pub use search_box::SearchBox;
pub use switch_form::SwitchForm;
pub use switch_table::SwitchTable;
