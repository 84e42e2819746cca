mod research_travel;
mod travel_session;

pub use research_travel::*;
pub use travel_session::*;
