mod aligned;
mod fishing_range;
mod metrics;
mod minute_grid;
mod report;
mod taxonomy;
mod vessel;

pub use aligned::*;
pub use fishing_range::*;
pub use metrics::*;
pub use minute_grid::*;
pub use report::*;
pub use taxonomy::*;
pub use vessel::*;
