use clap::Parser;
use resume_match::{cli, config, error, report, scanner, upload};
use resume_match_common::MatchForm;
use cli::{Cli, Commands};
use config::Config;
use error::{ResumeMatchError, Result};
use upload::UploadFile;

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Submit { resumes, resume_dir, job_description, endpoint, json } => {
            eprintln!("📄 resume-match - 履歴書マッチング\n");

            // 1. ファイル読み込み
            let mut resume_paths = resumes;
            if let Some(dir) = resume_dir {
                resume_paths.extend(scanner::scan_resume_folder(&dir)?);
            }

            let resume_files = resume_paths
                .iter()
                .map(|path| UploadFile::from_path(path))
                .collect::<Result<Vec<_>>>()?;
            let job_file = UploadFile::from_path(&job_description)?;
            eprintln!("✔ 履歴書 {}件 / 求人票 {}", resume_files.len(), job_file.file_name);

            let mut form = MatchForm::new();
            form.set_resumes(resume_files);
            form.set_job_description(vec![job_file]);
            form.ensure_ready()?;

            // 2. 送信
            let endpoint = config.resolve_endpoint(endpoint.as_deref());
            eprintln!("- 送信中... {}", endpoint);
            let client = upload::build_client(config.timeout())?;

            if json {
                let response = upload::fetch_response(&client, &endpoint, &form)
                    .await
                    .ok_or(ResumeMatchError::SubmitFailed)?;
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }

            if !upload::submit(&client, &endpoint, &mut form).await {
                return Err(ResumeMatchError::SubmitFailed);
            }

            // 3. 結果表示
            if form.matches().is_empty() {
                eprintln!("照合結果はありません");
            } else {
                print!("{}", report::render_table(form.matches()));
            }
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ 送信先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  送信先: {}", config.endpoint);
                println!("  実際の送信先: {}", config.resolve_endpoint(None));
                match config.timeout() {
                    Some(timeout) => println!("  タイムアウト: {}秒", timeout.as_secs()),
                    None => println!("  タイムアウト: なし"),
                }
            }
        }
    }

    Ok(())
}
