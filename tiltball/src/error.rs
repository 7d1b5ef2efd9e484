// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("ファイル入出力に失敗しました: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML の読み込みに失敗しました: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("フィールド寸法が不正です: {0}")]
    InvalidField(String),
    #[error("換算係数が不正です: {0}")]
    InvalidScaleFactor(f64),
}
