// src/math/integrator.rs

/// 1軸ぶんの運動状態
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisState {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64, // 直前に適用した加速度サンプル
}

/// 2つの加速度サンプルから変位を求める
///
/// 区間内で加速度が a0 から a1 へ線形に変化するとみなした場合の変位。
///
/// # 引数
/// - `v0`: 区間開始時の速度
/// - `a0`: 前回の加速度サンプル
/// - `a1`: 今回の加速度サンプル
/// - `dt`: 経過時間（秒）
///
/// # 戻り値
/// - 変位 `v0*dt + (1/6)*dt^2*(3*a0 + a1)`
pub fn displacement(v0: f64, a0: f64, a1: f64, dt: f64) -> f64 {
    v0 * dt + (1.0 / 6.0) * dt * dt * (3.0 * a0 + a1)
}

/// 台形則による速度更新
///
/// # 戻り値
/// - 更新後の速度 `v0 + 0.5*(a0 + a1)*dt`
pub fn trapezoidal_velocity(v0: f64, a0: f64, a1: f64, dt: f64) -> f64 {
    v0 + 0.5 * (a0 + a1) * dt
}

/// 1軸ぶんの積分ステップ
///
/// # 引数
/// - `state`: 現在の運動状態（`acceleration` が前回サンプル）
/// - `a1`: 新しい加速度サンプル
/// - `dt`: 前回サンプルからの経過時間（秒）
///
/// # 戻り値
/// - 更新後の運動状態。`acceleration` は `a1` に置き換わる
pub fn integrate_axis(state: AxisState, a1: f64, dt: f64) -> AxisState {
    let a0 = state.acceleration;
    AxisState {
        position: state.position + displacement(state.velocity, a0, a1, dt),
        velocity: trapezoidal_velocity(state.velocity, a0, a1, dt),
        acceleration: a1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// test_displacement_constant_acceleration
    /// a0 = a1 = 2.0, dt = 0.1 のとき、変位は (1/6) * 0.01 * (3*2 + 2) = 0.08 / 6 = 0.013333... です。
    #[test]
    fn test_displacement_constant_acceleration() {
        let d = displacement(0.0, 2.0, 2.0, 0.1);
        assert!((d - 0.08 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_displacement_weights_previous_sample() {
        // a0 の重みは a1 の3倍
        let d_prev = displacement(0.0, 1.0, 0.0, 1.0);
        let d_next = displacement(0.0, 0.0, 1.0, 1.0);
        assert!((d_prev - 0.5).abs() < 1e-12);
        assert!((d_next - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoidal_velocity() {
        let v = trapezoidal_velocity(1.0, 2.0, 4.0, 0.5);
        // 1.0 + 0.5 * 6.0 * 0.5 = 2.5
        assert!((v - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_integrate_axis_at_rest() {
        let state = AxisState { position: 10.0, velocity: 0.0, acceleration: 0.0 };
        let next = integrate_axis(state, 0.0, 0.25);
        assert_eq!(next, state);
    }

    #[test]
    fn test_integrate_axis_replaces_acceleration() {
        let state = AxisState { position: 475.0, velocity: 0.0, acceleration: 2.0 };
        let next = integrate_axis(state, 2.0, 0.1);

        // Δ = (1/6) * 0.01 * (6 + 2) = 0.013333...
        assert!((next.position - (475.0 + 0.08 / 6.0)).abs() < 1e-9);
        assert!((next.velocity - 0.2).abs() < 1e-12);
        assert_eq!(next.acceleration, 2.0);
    }

    #[test]
    fn test_integrate_axis_zero_dt() {
        let state = AxisState { position: 3.0, velocity: 5.0, acceleration: 1.0 };
        let next = integrate_axis(state, 7.0, 0.0);
        assert_eq!(next.position, 3.0);
        assert_eq!(next.velocity, 5.0);
        assert_eq!(next.acceleration, 7.0);
    }
}
