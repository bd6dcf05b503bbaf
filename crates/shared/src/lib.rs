pub mod error;
pub mod protocol;
pub mod record;
pub mod schema;

pub use error::{FormError, ProtocolError};
pub use protocol::{FailureKind, PredictionReply, PredictionResult, ResponseShape, ResultDisplay};
pub use record::{FieldValue, FormRecord};
pub use schema::{FieldKind, FieldSpec, Section};
