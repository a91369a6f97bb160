//! Adapter layer - controllers that turn use case results into responses.

mod user_controller;

pub use user_controller::{DeletedUser, UserController};
