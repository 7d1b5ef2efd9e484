// src/config/parameters.rs

use serde::Deserialize;

use crate::error::SimulationError;
use crate::models::controller::DEFAULT_SCALE_FACTOR;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FieldParameters {
    pub width: f64,     // フィールド幅 (px)
    pub height: f64,    // フィールド高さ (px)
    pub ball_size: f64, // ボールの一辺 (px)
}

impl FieldParameters {
    /// ボール生成前の寸法チェック
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [("width", self.width), ("height", self.height), ("ball_size", self.ball_size)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidField(format!("{name} = {value} は正の有限値である必要があります")));
            }
        }
        if self.ball_size > self.width || self.ball_size > self.height {
            return Err(SimulationError::InvalidField(format!(
                "ball_size = {} がフィールド {} x {} より大きい",
                self.ball_size, self.width, self.height
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ControllerParameters {
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64, // m/s² → px/s² 換算係数
}

impl Default for ControllerParameters {
    fn default() -> Self {
        ControllerParameters { scale_factor: DEFAULT_SCALE_FACTOR }
    }
}

impl ControllerParameters {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.scale_factor.is_finite() {
            return Err(SimulationError::InvalidScaleFactor(self.scale_factor));
        }
        Ok(())
    }
}

fn default_scale_factor() -> f64 {
    DEFAULT_SCALE_FACTOR
}
