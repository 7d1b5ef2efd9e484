// src/config/scenario.rs

use serde::Deserialize;

use crate::models::sensor::SensorEvent;

/// 記録済みのセンサ入力列
#[derive(Debug, Deserialize, Clone)]
pub struct Scenario {
    pub samples: Vec<SensorEvent>,
}
