use crate::error::{ResumeMatchError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// マッチングサーバーが受け付ける形式
const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// フォルダ直下の履歴書ファイル（PDF/DOCX）を列挙
///
/// ファイル名順にソートして返す
pub fn scan_resume_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ResumeMatchError::FolderNotFound(folder.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file() && is_resume_file(path))
        .collect();

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

fn is_resume_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| RESUME_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}
