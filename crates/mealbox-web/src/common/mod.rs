mod meal_card;
pub use meal_card::MealCardView;

mod spinner;
pub use spinner::Spinner;

pub mod snackbar;
