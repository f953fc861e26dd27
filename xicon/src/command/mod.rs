mod fix_icon;
mod resize_logo;

pub use fix_icon::{fix_icon, FixOutcome, IOS_APP_ICON};
pub use resize_logo::{resize_logo, try_resize_logo, LOGO};
