//! # CNN Calc
//!
//! `cnn_calc` 根据一串卷积/池化层的参数（核大小、步长、填充方式）和输入尺寸，
//! 逐层推算输出特征图尺寸以及每个输出单元在原始输入上的感受野。
//!
//! - [`nn`]：层描述、逐层传播计算与结果表格
//! - [`config`]：YAML/JSON 文档加载与输入尺寸确定
//! - [`errors`]：错误类型
//!

pub mod config;
pub mod errors;
pub mod nn;
