pub mod estimator;
pub mod home;

pub use home::HomePage;
