//! Widget tree primitives: geometry, bitmaps, the widget capability, the
//! focus cursor and the container that ties them together.

pub mod binding;
pub mod bitmap;
pub mod container;
pub mod cursor;
pub mod geom;
pub mod widget;

pub use binding::{Bindings, NavAction};
pub use bitmap::{Bitmap, Pixel};
pub use container::Container;
pub use cursor::Cursor;
pub use geom::{Insets, Pos, Rect, Size};
pub use widget::{Rendered, Widget};
