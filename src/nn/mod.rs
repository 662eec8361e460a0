/*
 * @Date         : 2026-10-19
 * @Description  : 负责网络逐层尺寸与感受野的推算
 */

mod descriptor;
mod display;
pub mod layer;
mod network;
mod propagation;

pub use descriptor::{LayerDescriptor, NetworkDescriptor};
pub(crate) use descriptor::positive;
pub use display::Summary;
pub use layer::{LayerSpec, LayerType, Padding};
pub use network::NetworkSpec;
pub use propagation::{LayerResult, output_size, propagate};

#[cfg(test)]
mod tests;
