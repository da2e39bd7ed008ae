pub mod catalog;
pub mod inference;
pub mod places;

pub use inference::InferenceClient;
pub use places::PlacesClient;
