// src/models/controller.rs

use tokio::sync::watch;

use crate::models::ball::Ball;
use crate::models::sensor::{elapsed_seconds, screen_acceleration, SensorEvent, SensorKind};
use crate::simulation::publisher::PositionPublisher;

/// 重力値（m/s²）を画面上の移動量（px/s²）へ換算する既定係数
pub const DEFAULT_SCALE_FACTOR: f64 = 50.0;

/// センサ入力をボールへ流し込み、位置を配信するコントローラ
///
/// フィールド寸法は描画側で初めて分かるため、ボールは
/// [`init_ball`](Self::init_ball) で一度だけ生成する。
#[derive(Debug)]
pub struct BallController {
    ball: Option<Ball>,
    last_timestamp_ns: Option<i64>,
    scale_factor: f64,
    publisher: PositionPublisher,
}

impl Default for BallController {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_FACTOR)
    }
}

impl BallController {
    pub fn new(scale_factor: f64) -> Self {
        BallController {
            ball: None,
            last_timestamp_ns: None,
            scale_factor,
            publisher: PositionPublisher::new([0.0, 0.0]),
        }
    }

    /// ボールを生成して中央位置を配信する。2回目以降は何もしない
    pub fn init_ball(&mut self, field_width: f64, field_height: f64, ball_size: f64) {
        if self.ball.is_some() {
            tracing::debug!("ball already initialized, ignoring init_ball");
            return;
        }
        let ball = Ball::new(field_width, field_height, ball_size);
        let [x, y] = ball.position();
        tracing::info!(field_width, field_height, ball_size, x, y, "ball initialized");
        self.publisher.publish(ball.position());
        self.ball = Some(ball);
    }

    /// センサイベント1件を処理する
    ///
    /// 重力センサ以外のイベントと、ボール生成前のイベントは無視する。
    /// 直前のタイムスタンプがあれば経過時間を求めてボールを更新し、
    /// 新しい位置を配信する。
    pub fn on_sensor_event(&mut self, event: &SensorEvent) {
        let Some(ball) = self.ball.as_mut() else {
            return;
        };
        if event.kind != SensorKind::Gravity {
            return;
        }

        if let Some(last) = self.last_timestamp_ns {
            let dt = elapsed_seconds(last, event.timestamp_ns);
            let [x_acc, y_acc] = screen_acceleration(&event.values, self.scale_factor);
            ball.update(x_acc, y_acc, dt);

            let position = ball.position();
            tracing::trace!(dt, x_acc, y_acc, x = position[0], y = position[1], "ball updated");
            self.publisher.publish(position);
        }

        self.last_timestamp_ns = Some(event.timestamp_ns);
    }

    /// ボールを中央へ戻し、タイムスタンプを忘れる
    pub fn reset(&mut self) {
        if let Some(ball) = self.ball.as_mut() {
            ball.reset();
            self.publisher.publish(ball.position());
        }
        self.last_timestamp_ns = None;
        tracing::debug!(subscribers = self.publisher.subscriber_count(), "controller reset");
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    /// 現在位置。ボール生成前は `None`
    pub fn position(&self) -> Option<[f64; 2]> {
        self.ball.as_ref().map(Ball::position)
    }

    pub fn subscribe(&self) -> watch::Receiver<[f64; 2]> {
        self.publisher.subscribe()
    }

    pub fn publisher(&self) -> &PositionPublisher {
        &self.publisher
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}
