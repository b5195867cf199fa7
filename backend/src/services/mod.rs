//! Business logic services
//!
//! Services validate requests, pick the generator each advisory call draws
//! from and delegate the calculations to the shared crate.

pub mod chat;
pub mod growth;
pub mod i18n;
pub mod irrigation;
pub mod plants;
pub mod profile;

pub use chat::ChatService;
pub use growth::GrowthService;
pub use i18n::I18nService;
pub use irrigation::IrrigationService;
pub use plants::PlantService;
pub use profile::ProfileService;
