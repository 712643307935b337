pub mod assessment;
pub mod enums;
pub mod patient;

pub use assessment::{Assessment, GeneralStatus, VitalSigns};
pub use patient::{Conditions, Medication, Patient};
