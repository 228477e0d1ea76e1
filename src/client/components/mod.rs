pub mod account_menu;
pub mod navbar;
pub mod page;

pub use account_menu::AccountMenu;
pub use navbar::Navbar;
pub use page::Page;
