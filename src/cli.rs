use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-match")]
#[command(about = "履歴書と求人票をアップロードしてマッチング結果を表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書と求人票を送信して照合結果を表示
    Submit {
        /// 履歴書ファイル（複数指定可）
        #[arg(short, long = "resume", num_args = 1..)]
        resumes: Vec<PathBuf>,

        /// 履歴書フォルダ（直下のPDF/DOCXをすべて追加）
        #[arg(long)]
        resume_dir: Option<PathBuf>,

        /// 求人票ファイル
        #[arg(short, long, required = true)]
        job_description: PathBuf,

        /// 送信先URL（省略時は設定ファイル/環境変数）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 表ではなくレスポンスJSONをそのまま出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 送信先URLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit() {
        let cli = Cli::parse_from([
            "resume-match",
            "submit",
            "--resume",
            "a.pdf",
            "b.pdf",
            "--job-description",
            "jd.pdf",
        ]);

        match cli.command {
            Commands::Submit { resumes, job_description, endpoint, json, resume_dir } => {
                assert_eq!(resumes, vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]);
                assert_eq!(job_description, PathBuf::from("jd.pdf"));
                assert!(endpoint.is_none());
                assert!(resume_dir.is_none());
                assert!(!json);
            }
            _ => panic!("submit expected"),
        }
    }

    #[test]
    fn test_parse_submit_requires_job_description() {
        let result = Cli::try_parse_from(["resume-match", "submit", "-r", "a.pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::parse_from(["resume-match", "config", "--show", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Config { show: true, .. }));
    }
}
