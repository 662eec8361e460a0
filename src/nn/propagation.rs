/*
 * @Date         : 2026-10-19
 * @Description  : 逐层传播输出尺寸与感受野
 *
 * 对层序列做一次从左到右的折叠，运行状态为 (size, jump, receptive_field)：
 *
 * 输出尺寸：
 *   same:  out = ceil(size / stride)
 *   valid: out = ceil((size - kernel + 1) / stride)
 *
 * 感受野与累计步长：
 *   rf'   = rf + (kernel - 1) * jump
 *   jump' = jump * stride
 *
 * 感受野中心（输入坐标，初始0.5即第一个像素的中心）：
 *   center' = center + ((kernel - 1) / 2 - padding) * jump
 *
 * 层类型（conv/pool）不影响计算。
 */

use super::layer::{LayerSpec, Padding};
use crate::errors::{CalcError, SpecLocation, SpecViolation};

/// 单层的计算结果，与输入层序一一对应
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerResult {
    /// 本层输出特征图尺寸
    pub output_size: usize,
    /// 本层一个输出单元对应的原始输入像素数
    pub receptive_field: usize,
    /// 截至本层（含）的步长累乘
    pub jump: usize,
    /// 第一个输出单元的感受野中心在原始输入中的位置
    pub receptive_field_center: f64,
}

impl LayerResult {
    /// 传播起点：原始输入本身
    pub const fn input(input_size: usize) -> Self {
        Self {
            output_size: input_size,
            receptive_field: 1,
            jump: 1,
            receptive_field_center: 0.5,
        }
    }
}

/// 按填充方式计算单层输出尺寸
///
/// 卷积核放不进输入（valid 且 `kernel_size > size`）、结果为0，
/// 或 `kernel_size`/`stride` 为0时返回`None`。
pub fn output_size(size: usize, layer: &LayerSpec) -> Option<usize> {
    if layer.kernel_size == 0 || layer.stride == 0 {
        return None;
    }
    let covered = match layer.padding {
        Padding::Same => size,
        Padding::Valid => size.checked_sub(layer.kernel_size - 1)?,
    };
    match covered.div_ceil(layer.stride) {
        0 => None,
        n => Some(n),
    }
}

/// 由上一层结果推出下一层结果
fn step(previous: &LayerResult, layer: &LayerSpec, index: usize) -> Result<LayerResult, CalcError> {
    let output_size =
        output_size(previous.output_size, layer).ok_or(CalcError::IncompatibleSize {
            layer_index: index,
            input_size: previous.output_size,
            kernel_size: layer.kernel_size,
            stride: layer.stride,
        })?;

    let overflow = || CalcError::ArithmeticOverflow { layer_index: index };
    let receptive_field = (layer.kernel_size - 1)
        .checked_mul(previous.jump)
        .and_then(|growth| previous.receptive_field.checked_add(growth))
        .ok_or_else(overflow)?;
    let jump = previous
        .jump
        .checked_mul(layer.stride)
        .ok_or_else(overflow)?;

    let center_offset = ((layer.kernel_size - 1) / 2) as f64 - layer.padding_amount() as f64;
    let receptive_field_center =
        previous.receptive_field_center + center_offset * previous.jump as f64;

    Ok(LayerResult {
        output_size,
        receptive_field,
        jump,
        receptive_field_center,
    })
}

/// 校验输入尺寸与所有层，任何一处不合法都不会产生部分结果
pub(crate) fn validate(input_size: usize, layers: &[LayerSpec]) -> Result<(), CalcError> {
    if input_size < 1 {
        return Err(SpecViolation::must_be_positive(
            SpecLocation::Input,
            "input_size",
            input_size as i64,
        )
        .into());
    }
    layers
        .iter()
        .enumerate()
        .try_for_each(|(index, layer)| layer.validate(index))
}

/// 计算每一层的输出尺寸、感受野与累计步长
///
/// 纯函数：相同输入总是得到相同输出，结果长度与 `layers` 相同且顺序一致。
///
/// # 错误
/// - `CalcError::InvalidSpec`：`input_size`、某层 `kernel_size` 或 `stride` 小于1
/// - `CalcError::IncompatibleSize`：某层输出尺寸非正，携带该层索引
///
/// # 示例
/// ```
/// use cnn_calc::nn::layer::LayerSpec;
/// use cnn_calc::nn::propagate;
///
/// let results = propagate(256, &[LayerSpec::new(3)]).unwrap();
/// assert_eq!(results[0].output_size, 256);
/// assert_eq!(results[0].receptive_field, 3);
/// ```
pub fn propagate(input_size: usize, layers: &[LayerSpec]) -> Result<Vec<LayerResult>, CalcError> {
    validate(input_size, layers)?;

    let mut results = Vec::with_capacity(layers.len());
    let mut previous = LayerResult::input(input_size);
    for (index, layer) in layers.iter().enumerate() {
        previous = step(&previous, layer, index)?;
        results.push(previous);
    }
    Ok(results)
}
