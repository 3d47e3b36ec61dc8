//! Static, process-lifetime content.

mod starters;

pub use starters::{STARTER_QUESTIONS, StarterQuestion};
