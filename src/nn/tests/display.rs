/*
 * @Date         : 2026-10-19
 * @Description  : Summary 表格显示单元测试
 */

use crate::errors::CalcError;
use crate::nn::{LayerSpec, NetworkSpec, Padding, Summary, propagate};

fn small_network() -> NetworkSpec {
    NetworkSpec::new(128, Vec::new())
        .layer(LayerSpec::new(3))
        .layer(LayerSpec::new(3).with_stride(2))
        .layer(LayerSpec::new(3).with_padding(Padding::Valid))
        .layer(LayerSpec::pool(2))
}

#[test]
fn test_table_layout() -> Result<(), CalcError> {
    let network = small_network();
    let results = network.propagate()?;
    let table = Summary::new(&network, &results).to_table_string();
    let lines: Vec<&str> = table.lines().collect();

    // 表头 + 横线 + 输入行 + 4层 + 横线
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("# "));
    assert!(lines[0].contains("Receptive Field"));
    assert!(lines[1].chars().all(|c| c == '-'));
    assert_eq!(lines[1], lines[7]);

    assert!(lines[2].starts_with("- "));
    assert!(lines[2].contains("Input"));
    assert!(lines[4].contains("Conv [kernel_size=3, stride=2, padding=1(same)]"));
    assert!(lines[6].contains("Pool [kernel_size=2, stride=1, padding=1(same)]"));

    // 所有行等宽
    assert!(lines.iter().all(|line| line.len() == lines[1].len()));

    println!("{table}");
    Ok(())
}

#[test]
fn test_table_cells() -> Result<(), CalcError> {
    let network = small_network();
    let results = network.propagate()?;
    let table = Summary::new(&network, &results).to_table_string();

    let cells: Vec<Vec<String>> = table
        .lines()
        .skip(2)
        .take(5)
        .map(|line| line.split(" | ").map(|c| c.trim().to_string()).collect())
        .collect();

    assert_eq!(cells[0][2..], ["128", "1", "1", "0.5"]);
    assert_eq!(cells[2][2..], ["64", "5", "2", "0.5"]);
    assert_eq!(cells[3][2..], ["62", "9", "2", "2.5"]);
    assert_eq!(cells[4][0], "3");
    assert_eq!(cells[4][3], "11");
    Ok(())
}

#[test]
fn test_display_matches_table_string() -> Result<(), CalcError> {
    let network = small_network();
    let results = network.propagate()?;
    let summary = Summary::new(&network, &results);

    assert_eq!(summary.to_string(), summary.to_table_string());
    Ok(())
}

#[test]
fn test_markdown() -> Result<(), CalcError> {
    let network = small_network();
    let results = network.propagate()?;
    let markdown = Summary::new(&network, &results).to_markdown();

    assert!(markdown.starts_with(
        "| # | Layer | Output Size | Receptive Field | Jump | Center |\n|---|---|---|---|---|---|\n"
    ));
    assert!(markdown.contains("| - | Input | 128 | 1 | 1 | 0.5 |\n"));
    assert!(
        markdown.contains("| 1 | Conv [kernel_size=3, stride=2, padding=1(same)] | 64 | 5 | 2 | 0.5 |\n")
    );
    assert_eq!(markdown.lines().count(), 7);
    Ok(())
}

#[test]
fn test_save_by_extension() -> Result<(), Box<dyn std::error::Error>> {
    let network = small_network();
    let results = network.propagate()?;
    let summary = Summary::new(&network, &results);

    let dir = std::env::temp_dir();
    let md_path = dir.join(format!("cnn_calc_summary_{}.md", std::process::id()));
    let txt_path = dir.join(format!("cnn_calc_summary_{}.txt", std::process::id()));

    summary.save(&md_path)?;
    summary.save(&txt_path)?;

    assert_eq!(std::fs::read_to_string(&md_path)?, summary.to_markdown());
    assert_eq!(
        std::fs::read_to_string(&txt_path)?,
        format!("{}\n", summary.to_table_string())
    );

    std::fs::remove_file(md_path)?;
    std::fs::remove_file(txt_path)?;
    Ok(())
}

#[test]
fn test_markdown_escapes_pipe_in_name() -> Result<(), CalcError> {
    let network = NetworkSpec::new(16, vec![LayerSpec::new(3).with_name("a|b")]);
    let results = network.propagate()?;
    let markdown = Summary::new(&network, &results).to_markdown();

    assert!(markdown.contains(r"| 0 | Conv a\|b [kernel_size=3, stride=1, padding=1(same)] | 16 |"));
    // 每行的列分隔符数量一致
    let unescaped = |line: &str| line.replace(r"\|", "").matches('|').count();
    assert!(markdown.lines().all(|line| unescaped(line) == 7));
    Ok(())
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "结果数与层数不一致")]
fn test_summary_requires_one_result_per_layer() {
    let network = small_network();
    // 只传播前两层，结果数少于层数
    let results = propagate(network.input_size, &network.layers[..2]).unwrap();
    let _ = Summary::new(&network, &results);
}
