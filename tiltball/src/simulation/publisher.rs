// src/simulation/publisher.rs

use tokio::sync::watch;

/// ボール位置の配信
///
/// 最新値だけを保持する。読むのが遅い購読者も古い値を溜め込まず、
/// 次に読んだときに最新の位置だけを受け取る。
#[derive(Debug)]
pub struct PositionPublisher {
    sender: watch::Sender<[f64; 2]>,
}

impl PositionPublisher {
    pub fn new(initial: [f64; 2]) -> Self {
        let (sender, _) = watch::channel(initial);
        PositionPublisher { sender }
    }

    /// 購読者を追加する。購読直後から現在値を読める
    pub fn subscribe(&self) -> watch::Receiver<[f64; 2]> {
        let mut rx = self.sender.subscribe();
        // 現在値を未読扱いにする
        rx.mark_changed();
        rx
    }

    /// 値を更新して全購読者へ通知する
    ///
    /// 購読者がいなくても値は保持される。
    pub fn publish(&self, position: [f64; 2]) {
        self.sender.send_replace(position);
    }

    pub fn latest(&self) -> [f64; 2] {
        *self.sender.borrow()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
