pub mod admin;
pub mod observation;
pub mod profile;
pub mod specie;

pub use admin::{Admin, AdminFields, AdminPatch};
pub use observation::{Observation, ObservationFields, ObservationPatch};
pub use profile::{Profile, ProfileFields, ProfilePatch};
pub use specie::{Specie, SpecieFields, SpeciePatch};
