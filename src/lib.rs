mod stats;
mod util;
mod fit;

pub use stats::*;
pub use stats::distribution::*;
pub use util::*;
pub use fit::*;
pub use fit::report::*;
