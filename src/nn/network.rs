/*
 * @Date         : 2026-10-19
 * @Description  : 完整的网络描述（NetworkSpec）
 *
 * 由配置层在边界处一次性确定 input_size 后构造，传播计算只接收这一份明确的描述。
 */

use super::layer::LayerSpec;
use super::propagation::{LayerResult, propagate, validate};
use crate::errors::CalcError;

/// 输入尺寸 + 按前向顺序排列的层
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSpec {
    pub input_size: usize,
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    pub const fn new(input_size: usize, layers: Vec<LayerSpec>) -> Self {
        Self { input_size, layers }
    }

    /// 追加一层（链式调用）
    pub fn layer(mut self, layer: LayerSpec) -> Self {
        self.layers.push(layer);
        self
    }

    /// 只做结构校验，不做尺寸传播
    pub fn validate(&self) -> Result<(), CalcError> {
        validate(self.input_size, &self.layers)
    }

    /// 逐层计算输出尺寸与感受野
    pub fn propagate(&self) -> Result<Vec<LayerResult>, CalcError> {
        propagate(self.input_size, &self.layers)
    }
}
