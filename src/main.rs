//! 命令行入口
//!
//! 用法：`cnn_calc network.yaml --input-size 224`，或 `cat network.json | cnn_calc --input-size 224`

use anyhow::{Context, Result};
use clap::Parser;
use cnn_calc::config::{
    DocumentFormat, load_descriptor_from_path, load_descriptor_from_reader, resolve_network,
};
use cnn_calc::nn::Summary;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cnn_calc",
    version,
    about = "逐层计算卷积/池化网络的输出尺寸与感受野"
)]
struct Args {
    /// 网络文档（YAML 或 JSON），缺省或为 `-` 时从标准输入读取
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// 输入尺寸，优先于文档中的 input_size
    #[arg(long)]
    input_size: Option<usize>,

    /// 只解析文档并以 JSON 打印，不做计算
    #[arg(long)]
    parse_only: bool,

    /// 以 Markdown 表格输出
    #[arg(long)]
    markdown: bool,

    /// 同时将结果保存到文件（`.md` 为 Markdown，其他为纯文本）
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let descriptor = match args.config.as_deref() {
        Some(path) if path.as_os_str() != "-" => load_descriptor_from_path(path)
            .with_context(|| format!("无法加载网络文档 {}", path.display()))?,
        _ => {
            info!("从标准输入读取网络文档");
            load_descriptor_from_reader(std::io::stdin().lock(), DocumentFormat::Auto)
                .context("无法从标准输入加载网络文档")?
        }
    };

    if args.parse_only {
        println!("{}", descriptor.to_json()?);
        return Ok(());
    }

    let network = resolve_network(&descriptor, args.input_size)?;
    let results = network.propagate()?;
    let summary = Summary::new(&network, &results);

    if args.markdown {
        print!("{}", summary.to_markdown());
    } else {
        println!("{summary}");
    }

    if let Some(path) = &args.output {
        summary
            .save(path)
            .with_context(|| format!("无法保存结果到 {}", path.display()))?;
        info!("结果已保存到 {}", path.display());
    }

    Ok(())
}
