//! The components module contains all shared components for our app.

mod app;
mod icons;
mod multi_share_bar;
mod toaster;
mod track_list;

pub use app::*;
pub use icons::*;
pub use multi_share_bar::*;
pub use toaster::*;
pub use track_list::*;
