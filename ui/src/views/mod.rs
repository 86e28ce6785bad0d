//! Routable page views shared by every platform shell.

mod home;

pub use home::Home;
