//! Leptos UI components

mod content_output;
mod copy_button;
mod empty_state;
mod error_boundary;
mod header;
mod plan_features;
mod profile_setup;
mod toast;
mod upgrade_prompt;

pub use content_output::ContentOutput;
pub use copy_button::CopyButton;
pub use empty_state::EmptyState;
pub use error_boundary::ErrorFallback;
pub use header::Header;
pub use plan_features::PlanFeatures;
pub use profile_setup::ProfileSetup;
pub use toast::{use_toast, ToastContext, ToastProvider};
pub use upgrade_prompt::UpgradePrompt;
