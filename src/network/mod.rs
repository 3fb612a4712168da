pub mod init;
pub mod network;
pub mod spec;
pub mod unit;

pub use init::WeightInit;
pub use network::Network;
pub use spec::NetworkSpec;
pub use unit::{Edge, SourceLayer, Unit, UnitKind, UnitRef};
