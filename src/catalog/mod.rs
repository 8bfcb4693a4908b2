pub mod client;
pub mod error;
pub mod remote;

pub use client::{CatalogClient, GroupRef, OrganizationDraft, OrganizationPatch, UserDraft};
pub use error::CatalogError;
pub use remote::RemoteCatalog;
