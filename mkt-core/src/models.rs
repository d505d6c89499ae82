mod analysis;
mod config;
mod curve;
mod observation;
mod outcome;
mod record;

pub use analysis::*;
pub use config::*;
pub use curve::*;
pub use observation::*;
pub use outcome::*;
pub use record::*;
