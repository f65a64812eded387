pub mod dice;
pub mod display;
pub mod error;
pub mod game;
pub mod roller;
