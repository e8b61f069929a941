pub mod initialize;
pub mod deposit;
pub mod withdraw;
pub mod close;

pub use initialize::*;
pub use deposit::*;
pub use withdraw::*;
pub use close::*;
