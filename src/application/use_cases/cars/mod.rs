//! Car Use Cases

mod list_cars;

pub use list_cars::ListCarsUseCase;
