/*
 * @Date         : 2026-10-19
 * @Description  : 单层描述（LayerSpec）
 *
 * 一维模型：只描述核大小、步长、填充方式与层类型，
 * 不涉及通道、批次、膨胀或宽高不对称的情形。
 */

use super::{LayerType, Padding};
use crate::errors::{CalcError, SpecLocation, SpecViolation};

/// 网络中的一层
///
/// # 默认值
/// - `layer_type`: `Conv`
/// - `padding`: `Same`
/// - `stride`: 1
///
/// # 使用示例
/// ```
/// use cnn_calc::nn::layer::{LayerSpec, Padding};
///
/// let conv = LayerSpec::new(3).with_stride(2).with_padding(Padding::Valid);
/// assert_eq!(conv.kernel_size, 3);
/// assert_eq!(conv.stride, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerSpec {
    pub layer_type: LayerType,
    pub padding: Padding,
    /// 卷积核（池化窗口）大小，须≥1
    pub kernel_size: usize,
    /// 步长，须≥1
    pub stride: usize,
    /// 层名称（仅用于展示）
    pub name: Option<String>,
}

impl LayerSpec {
    /// 以默认参数创建卷积层
    pub const fn new(kernel_size: usize) -> Self {
        Self {
            layer_type: LayerType::Conv,
            padding: Padding::Same,
            kernel_size,
            stride: 1,
            name: None,
        }
    }

    /// 以默认参数创建池化层（步长同样默认为1）
    pub fn pool(kernel_size: usize) -> Self {
        Self::new(kernel_size).with_type(LayerType::Pool)
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_type(mut self, layer_type: LayerType) -> Self {
        self.layer_type = layer_type;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// 单侧填充像素数
    pub const fn padding_amount(&self) -> usize {
        self.padding.amount(self.kernel_size)
    }

    /// 校验结构约束：`kernel_size >= 1`、`stride >= 1`
    ///
    /// `index` 只用于错误信息中定位出错的层
    pub fn validate(&self, index: usize) -> Result<(), CalcError> {
        let location = SpecLocation::Layer(index);
        if self.kernel_size < 1 {
            return Err(SpecViolation::must_be_positive(
                location,
                "kernel_size",
                self.kernel_size as i64,
            )
            .into());
        }
        if self.stride < 1 {
            return Err(
                SpecViolation::must_be_positive(location, "stride", self.stride as i64).into(),
            );
        }
        Ok(())
    }

    /// 展示用描述，如 `Conv conv1 [kernel_size=3, stride=1, padding=1(same)]`
    pub fn description(&self) -> String {
        let mut description = self.layer_type.display_name().to_string();
        if let Some(name) = &self.name {
            description.push(' ');
            description.push_str(name);
        }
        format!(
            "{description} [kernel_size={}, stride={}, padding={}({})]",
            self.kernel_size,
            self.stride,
            self.padding_amount(),
            self.padding
        )
    }
}
