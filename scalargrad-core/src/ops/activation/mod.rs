pub mod softplus;
pub mod tanh;

pub use softplus::softplus_op;
pub use tanh::tanh_op;
