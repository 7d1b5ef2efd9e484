// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;

use crate::config::{ControllerParameters, FieldParameters, Scenario};
use crate::error::SimulationError;

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, SimulationError> {
    let file = File::open(path)?;
    let value: T = from_reader(file)?;
    tracing::debug!(path = %path.display(), "loaded yaml");
    Ok(value)
}

/// フィールドパラメータの読み込み
pub fn load_field_parameters(path: impl AsRef<Path>) -> Result<FieldParameters, SimulationError> {
    let params: FieldParameters = load_yaml(path.as_ref())?;
    params.validate()?;
    Ok(params)
}

/// コントローラパラメータの読み込み
pub fn load_controller_parameters(path: impl AsRef<Path>) -> Result<ControllerParameters, SimulationError> {
    let params: ControllerParameters = load_yaml(path.as_ref())?;
    params.validate()?;
    Ok(params)
}

/// シナリオの読み込み
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, SimulationError> {
    load_yaml(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tiltball_{}_{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_field_parameters() {
        let path = write_temp("field.yaml", "width: 1000.0\nheight: 2000.0\nball_size: 50.0\n");
        let params = load_field_parameters(&path).unwrap();
        assert_eq!(params, FieldParameters { width: 1000.0, height: 2000.0, ball_size: 50.0 });
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_field_parameters_rejects_oversized_ball() {
        let path = write_temp("big_ball.yaml", "width: 10.0\nheight: 2000.0\nball_size: 50.0\n");
        let result = load_field_parameters(&path);
        assert!(matches!(result, Err(SimulationError::InvalidField(_))));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_scenario("/nonexistent/tiltball/scenario.yaml");
        assert!(matches!(result, Err(SimulationError::Io(_))));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let path = write_temp("bad.yaml", "width: [not, a, number\n");
        let result = load_field_parameters(&path);
        assert!(matches!(result, Err(SimulationError::Yaml(_))));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_scenario() {
        let yaml = "\
samples:
  - kind: gravity
    timestamp_ns: 0
    values: [0.0, 0.0, 9.8]
  - kind: accelerometer
    timestamp_ns: 5000000
    values: [0.1, 0.1, 9.8]
";
        let path = write_temp("scenario.yaml", yaml);
        let scenario = load_scenario(&path).unwrap();
        assert_eq!(scenario.samples.len(), 2);
        assert_eq!(scenario.samples[1].timestamp_ns, 5_000_000);
        std::fs::remove_file(path).unwrap();
    }
}
