pub mod form_page;
pub mod picker_page;

pub use form_page::ProductFormPage;
pub use picker_page::ProductPickerPage;
