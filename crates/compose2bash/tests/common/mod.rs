#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn write_compose(&self, content: &str) {
        let path = self.root.path().join("docker-compose.yml");
        fs::write(path, content).unwrap();
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    /// 出力先ディレクトリを作成して返す
    pub fn output_dir(&self) -> PathBuf {
        let dir = self.root.path().join("out");
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn read_script(&self, file_name: &str) -> String {
        fs::read_to_string(self.output_dir().join(file_name)).unwrap()
    }

    /// プロジェクト内（ルートと out/）にある .sh ファイルの数
    pub fn script_count(&self) -> usize {
        count_scripts(self.root.path()) + count_scripts(&self.output_dir())
    }
}

fn count_scripts(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "sh"))
        .count()
}
