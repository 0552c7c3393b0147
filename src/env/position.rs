//! 位置类型
//!
//! 定义平面上的节点位置及欧氏距离。

/// 平面位置（欧氏度量）。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    /// 创建新位置
    pub fn new(x: f64, y: f64) -> Position {
        Position { x, y }
    }

    /// 到另一位置的欧氏距离
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
