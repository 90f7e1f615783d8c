// Client-selected pages. Exactly one renders at a time.

mod contact;
mod home;
mod jobs;
mod privacy;
mod services;

pub use contact::ContactPage;
pub use home::HomePage;
pub use jobs::JobsPage;
pub use privacy::PrivacyPage;
pub use services::ServicesPage;
