mod preference;
mod query_params;
mod raw_output;
mod reasoning_effort;
mod result_envelope;
mod saved_itinerary;
mod section;
mod travel_plan;

pub use preference::*;
pub use query_params::*;
pub use raw_output::*;
pub use reasoning_effort::*;
pub use result_envelope::*;
pub use saved_itinerary::*;
pub use section::*;
pub use travel_plan::*;
