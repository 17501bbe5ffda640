pub mod fund_vault;
pub mod initialize;
pub mod play;
pub mod set_house;
pub mod withdraw;

pub use fund_vault::*;
pub use initialize::*;
pub use play::*;
pub use set_house::*;
pub use withdraw::*;
