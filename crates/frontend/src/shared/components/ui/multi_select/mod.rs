//! MultiSelect
//!
//! Выпадающий список множественного выбора с бейджами выбранных позиций,
//! поиском и массовыми действиями.
//!
//! ## Использование
//!
//! ```ignore
//! use crate::shared::components::ui::multi_select::{MultiSelect, SelectOption};
//!
//! view! {
//!     <MultiSelect
//!         options=options_signal
//!         on_selection_change=Callback::new(move |ids: Vec<String>| { /* ... */ })
//!         on_panel_open=Callback::new(move |_| { /* запустить загрузку */ })
//!         is_loading=loading_signal
//!     />
//! }
//! ```

pub mod component;
pub mod state;

pub use component::MultiSelect;
pub use state::SelectOption;
