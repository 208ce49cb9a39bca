pub mod scan_domain;
pub mod walk_delegation;

pub use scan_domain::ScanDomainUseCase;
pub use walk_delegation::WalkDelegationUseCase;
