pub(crate) mod summary;
pub use summary::Summary;

pub(crate) mod workout;
pub use workout::Workout;

pub(crate) mod running;
pub use running::Running;

pub(crate) mod walking;
pub use walking::SportsWalking;

pub(crate) mod swimming;
pub use swimming::Swimming;

pub(crate) mod session;
pub use session::Session;

mod error;
pub use error::DecodeError;
