mod curve;
mod basis;
mod solve;
mod fit;
mod through;

pub use self::curve::*;
pub use self::basis::*;
pub use self::solve::*;
pub use self::fit::*;
pub use self::through::*;
