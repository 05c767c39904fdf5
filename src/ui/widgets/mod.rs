//! Leaf widgets for the monochrome display.

pub mod button;
pub mod label;
pub mod scrollbar;
pub mod textbox;

pub use button::Button;
pub use label::Label;
pub use scrollbar::{Orientation, ScrollBar};
pub use textbox::TextBox;
