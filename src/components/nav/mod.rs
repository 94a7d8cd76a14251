//! Page navigation: scroll-spy nav bar and theme toggle.

mod navbar;
mod theme_toggle;

pub use navbar::Navbar;
pub use theme_toggle::ThemeToggle;
