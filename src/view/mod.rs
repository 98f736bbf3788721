// View layer: card projection, booking notifications and the controller that
// owns the active category and the rendered card list.

pub mod card;
pub mod controller;
pub mod notification;

pub use card::{CardView, CategoryControl};
pub use controller::ViewController;
pub use notification::Notification;
