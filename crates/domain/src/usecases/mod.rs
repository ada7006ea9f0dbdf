//! Application use cases / business logic

pub mod bootstrap;
pub mod tag_wizard;

pub use bootstrap::BootstrapTaxonomy;
pub use tag_wizard::{NoProgress, ProgressSink, TagWizard, WizardConfig, WizardError};
