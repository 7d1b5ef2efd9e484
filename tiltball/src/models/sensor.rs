// src/models/sensor.rs

use serde::Deserialize;

/// ナノ秒 → 秒
pub const NS2S: f64 = 1.0e-9;

/// センサ種別
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Gravity,
    Accelerometer,
    #[serde(other)]
    Other,
}

/// センサから届く1サンプル
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SensorEvent {
    pub kind: SensorKind,
    pub timestamp_ns: i64,  // 単調増加のタイムスタンプ（ns）
    pub values: [f64; 3],   // [gx, gy, gz]（m/s²）
}

/// 2つのタイムスタンプ間の経過時間（秒）
///
/// 差がオーバーフローする場合は折り返す。
pub fn elapsed_seconds(previous_ns: i64, current_ns: i64) -> f64 {
    current_ns.wrapping_sub(previous_ns) as f64 * NS2S
}

/// 重力ベクトルを画面座標系の加速度に変換する
///
/// 画面は +X が右、+Y が下向き。端末を手前に傾けると gy が負になり、
/// ボールは画面下方向へ動く。
///
/// # 引数
/// - `values`: 重力センサ値 [gx, gy, gz]
/// - `scale_factor`: m/s² → px/s² の換算係数
///
/// # 戻り値
/// - 画面座標系の加速度 [x_acc, y_acc]
pub fn screen_acceleration(values: &[f64; 3], scale_factor: f64) -> [f64; 2] {
    [values[0] * scale_factor, -values[1] * scale_factor]
}
