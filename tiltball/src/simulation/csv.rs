// src/simulation/csv.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::ball::Ball;

pub const CSV_HEADER: &str = "timestamp(ns),x(px),y(px),vx(px/s),vy(px/s)\n";

/// CSV出力の設定とヘッダーの書き込み
///
/// 出力先ディレクトリが無ければ作成する。
pub fn setup_csv_output(path: impl AsRef<Path>) -> Result<Box<dyn Write>, std::io::Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(Box::new(writer))
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(CSV_HEADER.as_bytes())
}

/// CSV行の作成
pub fn create_csv_row(timestamp_ns: i64, ball: &Ball) -> String {
    let [x, y] = ball.position();
    let [vx, vy] = ball.velocity();
    format!("{},{},{},{},{}\n", timestamp_ns, x, y, vx, vy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let mut buffer = Vec::new();
        write_csv_header(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), CSV_HEADER);
    }

    #[test]
    fn test_row_for_centered_ball() {
        let ball = Ball::new(1000.0, 2000.0, 50.0);
        assert_eq!(create_csv_row(123, &ball), "123,475,975,0,0\n");
    }
}
