pub mod documenter;
pub mod providers;

pub use documenter::DocGenerator;
