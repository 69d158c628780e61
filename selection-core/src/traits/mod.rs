//! Collaborator and service interfaces.

pub mod repository;
pub mod service;

pub use repository::ISelectionRepository;
pub use service::ISelectionService;
