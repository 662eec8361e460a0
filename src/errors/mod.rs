use thiserror::Error;
mod ops;
pub use self::ops::*;

/// 网络描述中违反结构约束的具体情形
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecViolation {
    // 数字比较用
    #[error("{location}的{value_name}须{operator}{threshold}，实际为{actual}")]
    ValueMustSatisfyComparison {
        location: SpecLocation,
        value_name: &'static str,
        operator: ComparisonOperator,
        threshold: usize,
        actual: i64,
    },
    #[error("{location}的{value_name}取值“{value}”无法识别，可选值为：{expected}")]
    UnknownVariant {
        location: SpecLocation,
        value_name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{location}缺少必填项{value_name}")]
    MissingField {
        location: SpecLocation,
        value_name: &'static str,
    },
}

impl SpecViolation {
    /// 构造“须≥1”类的错误，用于尺寸、核大小、步长
    pub(crate) const fn must_be_positive(
        location: SpecLocation,
        value_name: &'static str,
        actual: i64,
    ) -> Self {
        Self::ValueMustSatisfyComparison {
            location,
            value_name,
            operator: ComparisonOperator::GreaterOrEqual,
            threshold: 1,
            actual,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// 输入尺寸或某层参数不合法，整个计算中止
    #[error("网络描述无效：{0}")]
    InvalidSpec(#[from] SpecViolation),

    /// 某层之后特征图尺寸不再为正（卷积核放不进输入）
    #[error(
        "层[{layer_index}]输出尺寸非正：输入尺寸为{input_size}，卷积核为{kernel_size}，步长为{stride}"
    )]
    IncompatibleSize {
        layer_index: usize,
        input_size: usize,
        kernel_size: usize,
        stride: usize,
    },

    #[error("层[{layer_index}]的累计步长或感受野超出可表示范围")]
    ArithmeticOverflow { layer_index: usize },
}

impl CalcError {
    /// 出错层的索引（输入尺寸本身出错时为`None`）
    pub fn layer_index(&self) -> Option<usize> {
        match self {
            CalcError::InvalidSpec(
                SpecViolation::ValueMustSatisfyComparison { location, .. }
                | SpecViolation::UnknownVariant { location, .. }
                | SpecViolation::MissingField { location, .. },
            ) => match location {
                SpecLocation::Input => None,
                SpecLocation::Layer(index) => Some(*index),
            },
            CalcError::IncompatibleSize { layer_index, .. }
            | CalcError::ArithmeticOverflow { layer_index } => Some(*layer_index),
        }
    }
}
