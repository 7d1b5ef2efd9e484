// src/main.rs

use std::error::Error;

use tracing_subscriber::EnvFilter;

use tiltball::simulation::csv::setup_csv_output;
use tiltball::simulation::framework::{initialize_controller, run_scenario};
use tiltball::simulation::load_parameters::{load_controller_parameters, load_field_parameters, load_scenario};

const DEFAULT_FIELD: &str = "config/field_parameters.yaml";
const DEFAULT_CONTROLLER: &str = "config/controller_parameters.yaml";
const DEFAULT_SCENARIO: &str = "config/scenario.yaml";
const OUTPUT: &str = "output/simulation_results.csv";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 引数: [field.yaml] [controller.yaml] [scenario.yaml]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize, default: &'static str| args.get(i).map(String::as_str).unwrap_or(default).to_string();

    // 設定とシナリオの読み込み
    let field = load_field_parameters(arg(0, DEFAULT_FIELD))?;
    let controller_params = load_controller_parameters(arg(1, DEFAULT_CONTROLLER))?;
    let scenario = load_scenario(arg(2, DEFAULT_SCENARIO))?;

    let mut controller = initialize_controller(&field, &controller_params)?;

    // CSV出力の設定
    let mut writer = setup_csv_output(OUTPUT)?;

    // シナリオの再生
    let rows = run_scenario(&mut controller, &scenario, &mut *writer)?;
    tracing::info!(rows, output = OUTPUT, "simulation results written");

    Ok(())
}
