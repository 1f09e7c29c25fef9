pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod navigator;
pub mod setup;
pub mod transport;

pub use builder::TestBuilder;
pub use error::TestError;
pub use navigator::RecordingNavigator;
pub use setup::{TestGateway, TestSetup};
pub use transport::ScriptedTransport;

pub mod prelude {
    pub use crate::{
        fixtures::{booking, service, session},
        RecordingNavigator, ScriptedTransport, TestBuilder, TestError, TestGateway, TestSetup,
    };
}
