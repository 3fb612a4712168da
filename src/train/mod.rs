pub mod accuracy;
pub mod train_config;
pub mod trainer;

pub use accuracy::accuracy;
pub use train_config::TrainConfig;
pub use trainer::train_network;
