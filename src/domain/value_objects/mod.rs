//! Domain Value Objects
//!
//! Closed enumerations and small value types used by the farm entities.

mod disease_outcome;
mod gender;
mod mating_type;
mod payment_method;
mod pen_type;
mod record_id;
mod sheep_status;

pub use disease_outcome::DiseaseOutcome;
pub use gender::{Gender, SheepSource};
pub use mating_type::MatingType;
pub use payment_method::PaymentMethod;
pub use pen_type::PenType;
pub use record_id::{next_record_id, suggest_pen_id, RecordKind};
pub use sheep_status::SheepStatus;
