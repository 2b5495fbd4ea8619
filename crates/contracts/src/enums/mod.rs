pub mod registration_status;
pub mod size_band;
pub mod tender_status;

pub use registration_status::RegistrationStatus;
pub use size_band::SizeBand;
pub use tender_status::TenderStatus;
