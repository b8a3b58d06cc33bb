mod logout_button;
mod placeholder;
mod progress;

pub use logout_button::LogoutButton;
pub use placeholder::PlaceholderPage;
pub use progress::{ProgressBar, clamp_percent};
