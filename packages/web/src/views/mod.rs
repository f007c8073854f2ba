mod layout;
pub use layout::{AppShell, Protected};

mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod board;
pub use board::BoardPage;

mod not_found;
pub use not_found::NotFound;
