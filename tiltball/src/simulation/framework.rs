// src/simulation/framework.rs

use std::io::Write;

use crate::config::{ControllerParameters, FieldParameters, Scenario};
use crate::error::SimulationError;
use crate::models::controller::BallController;
use crate::simulation::csv::create_csv_row;

/// コントローラの初期化
///
/// 寸法を検証してからボールを生成する。
pub fn initialize_controller(
    field: &FieldParameters,
    controller_params: &ControllerParameters,
) -> Result<BallController, SimulationError> {
    field.validate()?;
    controller_params.validate()?;

    let mut controller = BallController::new(controller_params.scale_factor);
    controller.init_ball(field.width, field.height, field.ball_size);
    Ok(controller)
}

/// シナリオの再生
///
/// サンプルを順にコントローラへ渡し、サンプルごとにCSV行を1行書く。
///
/// # 戻り値
/// - 書き込んだ行数
pub fn run_scenario<W: Write + ?Sized>(
    controller: &mut BallController,
    scenario: &Scenario,
    writer: &mut W,
) -> Result<usize, SimulationError> {
    let mut rows = 0;
    for sample in &scenario.samples {
        controller.on_sensor_event(sample);
        if let Some(ball) = controller.ball() {
            writer.write_all(create_csv_row(sample.timestamp_ns, ball).as_bytes())?;
            rows += 1;
        }
    }
    writer.flush()?;

    if let Some([x, y]) = controller.position() {
        tracing::info!(samples = scenario.samples.len(), rows, x, y, "scenario finished");
    }
    Ok(rows)
}
