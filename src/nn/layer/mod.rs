/*
 * @Date         : 2026-10-19
 * @Description  : Layer 模块 - 单层的尺寸描述
 *
 * 这里的“层”只是尺寸计算所需的参数集合，不含任何权重。
 */

mod kind;
mod spec;

pub use kind::{LayerType, Padding};
pub use spec::LayerSpec;
