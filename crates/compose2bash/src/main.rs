mod commands;

use clap::Parser;
use colored::Colorize;
use compose2bash_config::{DEFAULT_COMPOSE_FILE, DEFAULT_OUTPUT_DIR, GenerateConfig, normalize_args};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "compose2bash")]
#[command(version)]
#[command(
    about = "docker-compose.yml をサービスごとの docker 起動スクリプトに変換",
    long_about = None
)]
struct Cli {
    /// アプリケーション名（サービス名・リンク先のプレフィックス）
    #[arg(long)]
    app: Option<String>,
    /// composeファイルのパス
    #[arg(long, default_value = DEFAULT_COMPOSE_FILE)]
    yml: PathBuf,
    /// スクリプトの出力先ディレクトリ
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
    /// リモートDockerデーモンの接続先（例: tcp://10.0.0.5:2375）
    #[arg(long = "docker-host")]
    docker_host: Option<String>,
    /// デバッグログを表示
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    // `-app foo` 形式も受け付ける
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    init_tracing(cli.verbose);

    let config = match GenerateConfig::new(
        cli.app.unwrap_or_default(),
        cli.yml,
        cli.output,
        cli.docker_host,
    ) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };

    let written = commands::generate::handle(&config)?;

    for path in &written {
        println!("  • {}", path.display().to_string().cyan());
    }
    println!("{}", "Successfully converted Yaml to Bash script.".green());

    Ok(())
}

/// ログはstderrに出力（stdoutは結果表示用）
///
/// RUST_LOG が設定されていればそれを優先する。
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
