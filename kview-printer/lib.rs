pub use self::errors::PrinterError;
pub use self::handler::PrinterHandler;
pub use self::handlers::{
    PodConfiguration, PodHandler, ReplicationControllerConfiguration, ReplicationControllerHandler,
    ServiceAccountConfiguration, ServiceAccountHandler,
};
pub use self::options::Options;
pub use self::registry::Registry;

pub mod derived;
pub mod quantity;

mod errors;
mod handler;
mod handlers;
mod options;
mod registry;
