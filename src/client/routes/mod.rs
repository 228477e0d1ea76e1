pub mod dashboard;
pub mod home;
pub mod my_bookings;
pub mod not_found;
pub mod rooms;

pub use dashboard::Dashboard;
pub use home::Home;
pub use my_bookings::MyBookings;
pub use not_found::NotFound;
pub use rooms::Rooms;
