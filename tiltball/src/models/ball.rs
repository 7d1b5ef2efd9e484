// src/models/ball.rs

use crate::math::{integrate_axis, AxisState};

const X: usize = 0;
const Y: usize = 1;

/// 積分器の状態遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationPhase {
    /// 生成直後またはリセット直後。次のサンプルは保存のみ
    AwaitingFirstSample,
    /// 前回サンプルがあり、積分を行う
    Integrating,
}

/// フィールド内を移動するボールの構造体
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    field_width: f64,  // フィールド幅（px）
    field_height: f64, // フィールド高さ（px）
    size: f64,         // ボールの一辺（px）
    axes: [AxisState; 2],
    phase: IntegrationPhase,
}

impl Ball {
    /// フィールド中央に静止したボールを生成する
    ///
    /// 寸法の妥当性は検証しない。呼び出し側で
    /// [`FieldParameters::validate`](crate::config::FieldParameters::validate) を通すこと。
    pub fn new(field_width: f64, field_height: f64, size: f64) -> Self {
        let mut ball = Ball {
            field_width,
            field_height,
            size,
            axes: [AxisState::default(); 2],
            phase: IntegrationPhase::AwaitingFirstSample,
        };
        ball.reset();
        ball
    }

    pub fn position(&self) -> [f64; 2] {
        [self.axes[X].position, self.axes[Y].position]
    }

    pub fn velocity(&self) -> [f64; 2] {
        [self.axes[X].velocity, self.axes[Y].velocity]
    }

    pub fn acceleration(&self) -> [f64; 2] {
        [self.axes[X].acceleration, self.axes[Y].acceleration]
    }

    pub fn phase(&self) -> IntegrationPhase {
        self.phase
    }

    /// 位置が取りうる上限 [x_max, y_max]
    pub fn max_position(&self) -> [f64; 2] {
        [self.field_width - self.size, self.field_height - self.size]
    }

    /// 加速度サンプルを1つ適用して位置と速度を更新する
    ///
    /// # 引数
    /// - `x_acc`, `y_acc`: 新しい加速度サンプル（px/s²）
    /// - `dt`: 前回サンプルからの経過時間（秒）
    ///
    /// 生成・リセット後の最初の呼び出しでは加速度を保存するだけで、
    /// 位置と速度は変化しない。
    pub fn update(&mut self, x_acc: f64, y_acc: f64, dt: f64) {
        match self.phase {
            IntegrationPhase::AwaitingFirstSample => {
                self.axes[X].acceleration = x_acc;
                self.axes[Y].acceleration = y_acc;
                self.phase = IntegrationPhase::Integrating;
            }
            IntegrationPhase::Integrating => {
                self.axes[X] = integrate_axis(self.axes[X], x_acc, dt);
                self.axes[Y] = integrate_axis(self.axes[Y], y_acc, dt);
                self.check_boundaries();
            }
        }
    }

    /// 壁を越えた軸の位置を壁に固定し、その軸の速度と加速度を0にする
    pub fn check_boundaries(&mut self) {
        let max = self.max_position();
        for (axis, limit) in self.axes.iter_mut().zip(max) {
            let before = *axis;
            *axis = clamp_axis(*axis, limit);
            if *axis != before {
                tracing::trace!(position = axis.position, limit, "ball stopped at wall");
            }
        }
    }

    /// 中央・静止状態に戻し、最初のサンプル待ちにする
    pub fn reset(&mut self) {
        let [x_max, y_max] = self.max_position();
        self.axes[X] = AxisState { position: x_max / 2.0, velocity: 0.0, acceleration: 0.0 };
        self.axes[Y] = AxisState { position: y_max / 2.0, velocity: 0.0, acceleration: 0.0 };
        self.phase = IntegrationPhase::AwaitingFirstSample;
    }
}

/// 1軸の境界処理（非弾性停止）
///
/// # 引数
/// - `state`: 積分後の運動状態
/// - `max`: 位置の上限（フィールド寸法 - ボール寸法）
///
/// # 戻り値
/// - 範囲外なら壁に固定し速度・加速度を0にした状態、範囲内ならそのまま
fn clamp_axis(state: AxisState, max: f64) -> AxisState {
    let mut clamped = state;
    if clamped.position < 0.0 {
        clamped = AxisState { position: 0.0, velocity: 0.0, acceleration: 0.0 };
    }
    if clamped.position > max {
        clamped = AxisState { position: max, velocity: 0.0, acceleration: 0.0 };
    }
    clamped
}
