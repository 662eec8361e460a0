/*
 * @Date         : 2026-10-19
 * @Description  : 计算结果的表格化显示
 *
 * 纯文本表格的列：# | Layer | Output Size | Receptive Field | Jump | Center
 * 表头下方与最后一行之后各有一条 `-` 横线；首行是原始输入（Input）。
 */

use super::network::NetworkSpec;
use super::propagation::LayerResult;
use std::fmt;
use std::path::Path;

const COLUMN_HEADERS: [&str; 6] = ["#", "Layer", "Output Size", "Receptive Field", "Jump", "Center"];
/// 最小列宽，`0` 表示按内容自适应
const COLUMN_WIDTHS: [usize; 6] = [0, 0, 12, 16, 6, 8];
const COLUMN_ALIGNS: [Align; 6] = [
    Align::Left,
    Align::Left,
    Align::Center,
    Align::Center,
    Align::Center,
    Align::Center,
];
const COLUMN_SEPARATOR: &str = " | ";
const HORIZONTAL_RULE_CHARACTER: char = '-';

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
}

/// 网络计算结果摘要（输入行 + 每层一行）
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    network: &'a NetworkSpec,
    results: &'a [LayerResult],
}

impl<'a> Summary<'a> {
    /// `results` 须为 `network.propagate()` 的结果，与层一一对应
    pub fn new(network: &'a NetworkSpec, results: &'a [LayerResult]) -> Self {
        debug_assert_eq!(
            network.layers.len(),
            results.len(),
            "结果数与层数不一致"
        );
        Self { network, results }
    }

    /// 每行的单元格文本（首行为原始输入）
    fn rows(&self) -> Vec<[String; 6]> {
        let input = LayerResult::input(self.network.input_size);
        let mut rows = vec![Self::row("-".to_string(), "Input".to_string(), &input)];
        rows.extend(
            self.network
                .layers
                .iter()
                .zip(self.results)
                .enumerate()
                .map(|(index, (layer, result))| {
                    Self::row(index.to_string(), layer.description(), result)
                }),
        );
        rows
    }

    fn row(index: String, description: String, result: &LayerResult) -> [String; 6] {
        [
            index,
            description,
            result.output_size.to_string(),
            result.receptive_field.to_string(),
            result.jump.to_string(),
            format!("{:.1}", result.receptive_field_center),
        ]
    }

    /// 返回纯文本表格（用于控制台输出）
    pub fn to_table_string(&self) -> String {
        let rows = self.rows();

        // 计算各列宽度
        let mut widths = COLUMN_WIDTHS;
        for (column, width) in widths.iter_mut().enumerate() {
            let content_width = rows
                .iter()
                .map(|row| display_width(&row[column]))
                .chain(std::iter::once(display_width(COLUMN_HEADERS[column])))
                .max()
                .unwrap_or(0);
            *width = (*width).max(content_width);
        }

        let header = COLUMN_HEADERS
            .iter()
            .zip(widths)
            .map(|(header, width)| pad(header, width, Align::Left))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);

        let lines: Vec<String> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(widths)
                    .zip(COLUMN_ALIGNS)
                    .map(|((cell, width), align)| pad(cell, width, align))
                    .collect::<Vec<_>>()
                    .join(COLUMN_SEPARATOR)
            })
            .collect();

        let rule_width = lines
            .iter()
            .map(|line| display_width(line))
            .chain(std::iter::once(display_width(&header)))
            .max()
            .unwrap_or(0);
        let horizontal_rule = HORIZONTAL_RULE_CHARACTER.to_string().repeat(rule_width);

        let mut output = String::new();
        output.push_str(&header);
        output.push('\n');
        output.push_str(&horizontal_rule);
        output.push('\n');
        for line in &lines {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str(&horizontal_rule);
        output
    }

    /// 返回 Markdown 表格
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("| {} |\n", COLUMN_HEADERS.join(" | ")));
        output.push_str(&format!(
            "|{}|\n",
            COLUMN_HEADERS.map(|_| "---").join("|")
        ));
        for row in self.rows() {
            let cells = row.map(|cell| cell.replace('|', "\\|"));
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }

        output
    }

    /// 将摘要保存到文件
    ///
    /// 根据文件扩展名选择格式：
    /// - `.md` → Markdown 表格
    /// - 其他 → 纯文本表格
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let path = path.as_ref();
        let summary = match path.extension().and_then(|e| e.to_str()) {
            Some("md") => self.to_markdown(),
            _ => self.to_table_string() + "\n",
        };
        std::fs::write(path, summary)
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table_string())
    }
}

/// 按显示宽度补齐
fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(display_width(text));
    let (left, right) = match align {
        Align::Left => (0, fill),
        Align::Center => (fill / 2, fill - fill / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// 计算字符串显示宽度（考虑中文字符）
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}
