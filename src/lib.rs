pub mod activation;
pub mod data;
pub mod error;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use data::record::{Dataset, Record};
pub use error::{DatasetError, NetworkError, TrainError, WeightMatrix};
pub use network::init::WeightInit;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use network::unit::{Edge, SourceLayer, Unit, UnitKind, UnitRef};
pub use train::accuracy::accuracy;
pub use train::train_config::TrainConfig;
pub use train::trainer::train_network;
