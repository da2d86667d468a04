mod category;
mod operand;
mod value;

pub use category::{PluralCategory, PluralKind};
pub use operand::{OperandError, PluralOperand};
pub use value::{OpaqueValue, Value};
