mod mediano;

pub use mediano::{Mediano, MedianoRequest, MedianoResponse, NewMediano};
