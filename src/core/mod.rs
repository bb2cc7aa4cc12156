//

pub mod error;
pub mod method;
pub mod object;
pub mod value;
