// ==========================================
// ARIAC 评分引擎 - CSV 导出
// ==========================================
// 格式: CRLF 行尾, 字符串字段 (表头、order_id) 始终加引号, 数值字段不加, 表头可选
// 每个订单一行; 计数来自 OrderScore::kitting_counts/assembly_counts
// 入口: CsvExport (为 OrderScore 实现), 领域层不依赖报告层
// ==========================================

use super::error::{ReportError, ReportResult};
use crate::domain::order_score::OrderScore;
use ::csv::{QuoteStyle, Terminator, WriterBuilder};

pub const KITTING_HEADER: [&str; 10] = [
    "order_id",
    "completion_score",
    "priority",
    "time",
    "is_complete",
    "shipments_requested",
    "shipments_submitted",
    "shipments_completed",
    "shipments_wrong_agv",
    "shipments_wrong_station",
];

pub const ASSEMBLY_HEADER: [&str; 9] = [
    "order_id",
    "completion_score",
    "priority",
    "time",
    "is_complete",
    "shipments_requested",
    "shipments_evaluated",
    "shipments_completed",
    "shipments_wrong_station",
];

/// 订单评分的 CSV 导出
pub trait CsvExport {
    /// 一行配套 CSV (可选表头)
    fn csv_kitting(&self, output_header: bool) -> ReportResult<String>;

    /// 一行装配 CSV (可选表头)
    fn csv_assembly(&self, output_header: bool) -> ReportResult<String>;
}

impl CsvExport for OrderScore {
    fn csv_kitting(&self, output_header: bool) -> ReportResult<String> {
        render_kitting_row(self, output_header)
    }

    fn csv_assembly(&self, output_header: bool) -> ReportResult<String> {
        render_assembly_row(self, output_header)
    }
}

/// 渲染配套 CSV 行
pub fn render_kitting_row(score: &OrderScore, output_header: bool) -> ReportResult<String> {
    let counts = score.kitting_counts();
    let row = vec![
        quoted(score.order_id()),
        score.compute_kitting_completion_score().to_string(),
        score.priority().factor().to_string(),
        score.time_taken().to_string(),
        flag(score.is_kitting_complete()),
        counts.requested.to_string(),
        counts.submitted.to_string(),
        counts.completed.to_string(),
        counts.wrong_agv.to_string(),
        counts.wrong_station.to_string(),
    ];
    write_rows(output_header.then_some(&KITTING_HEADER[..]), &row)
}

/// 渲染装配 CSV 行 (无 AGV 列)
pub fn render_assembly_row(score: &OrderScore, output_header: bool) -> ReportResult<String> {
    let counts = score.assembly_counts();
    let row = vec![
        quoted(score.order_id()),
        score.compute_assembly_completion_score().to_string(),
        score.priority().factor().to_string(),
        score.time_taken().to_string(),
        flag(score.is_assembly_complete()),
        counts.requested.to_string(),
        counts.submitted.to_string(),
        counts.completed.to_string(),
        counts.wrong_station.to_string(),
    ];
    write_rows(output_header.then_some(&ASSEMBLY_HEADER[..]), &row)
}

fn flag(value: bool) -> String {
    let text = if value { "1" } else { "0" };
    text.to_string()
}

/// 字符串字段: 外加双引号, 内部双引号成对转义
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

// 写出器不再自动加引号, 字符串字段已由 quoted 处理
fn write_rows(header: Option<&[&str]>, row: &[String]) -> ReportResult<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    if let Some(header) = header {
        let header: Vec<String> = header.iter().map(|name| quoted(name)).collect();
        writer.write_record(&header)?;
    }
    writer.write_record(row)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
