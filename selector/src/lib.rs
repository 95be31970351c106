pub mod closest;

pub use closest::{select_closest_robot, Selection, DISTANCE_WINDOW};

#[cfg(test)]
mod closest_tests;
