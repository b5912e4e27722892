mod badge;
mod points;
mod utils;

pub use badge::*;
pub use points::*;
pub use utils::*;
