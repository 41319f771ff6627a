// CoreUI kit component library

pub mod components;
pub mod utils;

/// Re-export of common components for convenience
pub mod prelude {
    pub use crate::kit::components::checkbox::{Checkbox, CheckboxProps};
    pub use crate::kit::components::input::{Input, InputProps, InputType};
    pub use crate::kit::components::label::{Label, LabelPosition, LabelProps};
}
