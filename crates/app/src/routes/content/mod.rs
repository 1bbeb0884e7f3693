mod list;
pub mod state;
mod view;

pub use list::ContentList;
pub use view::ContentView;
