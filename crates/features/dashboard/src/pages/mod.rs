mod budgets;
mod goals;
mod login;
mod not_found;
mod settings;

pub use budgets::Budgets;
pub use goals::Goals;
pub use login::Login;
pub use not_found::NotFound;
pub use settings::Settings;
