//! Page components

mod dashboard;
mod generator;
mod payment;
mod pricing;
mod stripe_setup;
mod subscription;

pub use dashboard::Dashboard;
pub use generator::Generator;
pub use payment::{PaymentFailure, PaymentSuccess};
pub use pricing::Pricing;
pub use stripe_setup::StripeSetup;
pub use subscription::Subscription;
