pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod multi_select;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use multi_select::{MultiSelect, SelectOption};
pub use textarea::Textarea;
