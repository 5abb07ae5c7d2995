// ==========================================
// ARIAC 评分引擎 - 命令行入口
// ==========================================
// 用法: ariac-scoring <run_script.json> [csv_output_path]
// 环境变量: ARIAC_SCORING_CONFIG (评分配置), RUST_LOG (日志级别)
// ==========================================

use anyhow::{Context, Result};
use ariac_scoring::{logging, CsvExport, RunController, RunScript, ScoringConfig};
use std::fs;

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", ariac_scoring::APP_NAME);
    tracing::info!("系统版本: {}", ariac_scoring::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .context("缺少参数: ariac-scoring <run_script.json> [csv_output_path]")?;
    let csv_path = args.next();

    let config = ScoringConfig::load_from_env().context("评分配置加载失败")?;
    let script = RunScript::from_json_file(&script_path)
        .with_context(|| format!("运行脚本加载失败: {}", script_path))?;

    let mut controller = RunController::new(config);
    script.replay(&mut controller).context("运行脚本回放失败")?;

    let game = controller.game_score();
    tracing::info!(total = game.total(), "评分完成");
    print!("{}", game);

    let mut csv = String::new();
    for (index, order) in game.order_scores().values().enumerate() {
        csv.push_str(&order.csv_kitting(index == 0)?);
    }

    match csv_path {
        Some(path) => {
            fs::write(&path, &csv).with_context(|| format!("CSV 写入失败: {}", path))?;
            tracing::info!(path = %path, "CSV 已写出");
        }
        None => print!("{}", csv),
    }

    Ok(())
}
