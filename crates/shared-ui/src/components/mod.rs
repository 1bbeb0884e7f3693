// Layout and text
pub mod card;
pub mod page_header;
pub mod skeleton;

// Controls
pub mod badge;
pub mod button;
pub mod input;
pub mod search_bar;

// Overlays
pub mod alert_dialog;
pub mod toast;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use page_header::*;
pub use search_bar::*;
pub use skeleton::*;
pub use toast::*;
