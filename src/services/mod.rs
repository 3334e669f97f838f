pub mod admin_service;
pub mod observation_service;
pub mod profile_service;
pub mod specie_service;

pub use admin_service::AdminService;
pub use observation_service::ObservationService;
pub use profile_service::ProfileService;
pub use specie_service::SpecieService;
