/*
 * @Date         : 2026-10-19
 * @Description  : 层类型与填充方式（封闭枚举）
 *
 * 文档中的字符串在解析阶段即被转换为枚举，非法取值不会进入尺寸计算。
 * 两者均不区分大小写："Conv"、"CONV"、"conv" 等价。
 */

use std::fmt;
use std::str::FromStr;

/// 层类型
///
/// 在本模型里卷积与池化的尺寸/感受野公式完全相同，类型只用于展示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayerType {
    #[default]
    Conv,
    Pool,
}

impl LayerType {
    /// 所有可选取值（用于错误提示）
    pub const VARIANTS: &'static str = "conv, pool";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Conv => "conv",
            Self::Pool => "pool",
        }
    }

    /// 展示用名称
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Conv => "Conv",
            Self::Pool => "Pool",
        }
    }
}

impl FromStr for LayerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conv" => Ok(Self::Conv),
            "pool" => Ok(Self::Pool),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 填充方式
///
/// - `Same`：每侧填充 `kernel_size / 2`，步长为1时输出尺寸不变
/// - `Valid`：不填充，输出缩小 `kernel_size - 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Padding {
    Valid,
    #[default]
    Same,
}

impl Padding {
    pub const VARIANTS: &'static str = "valid, same";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Same => "same",
        }
    }

    /// 单侧填充的像素数
    pub const fn amount(&self, kernel_size: usize) -> usize {
        match self {
            Self::Valid => 0,
            Self::Same => kernel_size / 2,
        }
    }
}

impl FromStr for Padding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "valid" => Ok(Self::Valid),
            "same" => Ok(Self::Same),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
