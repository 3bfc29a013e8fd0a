mod alert;
mod button;
mod spinner;
mod text_field;

pub use alert::{Alert, AlertKind};
pub use button::Button;
pub use spinner::Spinner;
pub use text_field::{TextField, input_class};
