//! Core types for the pairing kernel.

pub mod configuration;
pub mod declaration;
pub mod label;
pub mod node;
pub mod package;
pub mod transition;

pub use configuration::{Configuration, ConfigurationKey};
pub use declaration::SourceDeclaration;
pub use label::{Label, LabelError, PackageId};
pub use node::ConfiguredNode;
pub use package::{DeclarationNotFound, Package};
pub use transition::TransitionId;
