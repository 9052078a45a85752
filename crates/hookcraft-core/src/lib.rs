//! hookcraft-core - Core library for hookcraft
//!
//! Provides the actor contract, generation orchestrator, feature-gated
//! renderer, plan catalogue, and checkout/admin flows. Compiles to WASM;
//! the `native` feature adds the HTTP transport and file configuration.

pub mod actor;
pub mod admin;
pub mod checkout;
#[cfg(feature = "native")]
pub mod config;
pub mod error;
pub mod gating;
#[cfg(feature = "native")]
pub mod http;
pub mod models;
pub mod orchestrator;
pub mod plans;
pub mod session;

pub use actor::{
    AccountActor, ActorClient, ActorMethod, ActorTransport, AdminActor, BillingActor,
    GenerationActor,
};
pub use admin::StripeConfigForm;
pub use checkout::{confirm_payment, create_checkout, PaymentOutcome};
#[cfg(feature = "native")]
pub use config::AppConfig;
pub use error::{
    ActorError, ActorErrorKind, AdminError, CallFailure, CheckoutError, GenerationError,
};
#[cfg(feature = "native")]
pub use error::ConfigError;
pub use gating::{render_section, render_sections, Section, SectionBody, SectionView};
#[cfg(feature = "native")]
pub use http::HttpTransport;
pub use orchestrator::{GenerationOrchestrator, GenerationReport, Persistence, RequestToken};
pub use session::{resolve_session, Session};
