pub mod meal;
pub use meal::*;

pub mod meal_id;
pub use meal_id::*;
