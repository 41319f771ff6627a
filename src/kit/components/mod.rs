// CoreUI kit component module organization

// Form controls
pub mod checkbox;
pub mod input;

// Building blocks shared by the controls
pub mod icons;
pub mod label;


// Re-export commonly used components
pub use checkbox::{Checkbox, CheckboxProps, CheckboxValidator};
pub use icons::AlertCircleIcon;
pub use input::{Input, InputProps, InputType};
pub use label::{Label, LabelPosition, LabelProps};
