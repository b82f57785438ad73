use anyhow::Result;
use question_sequencer::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    // 初始化并运行应用
    let summary = App::initialize(config).run().await?;

    if summary.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
