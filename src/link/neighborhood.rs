//! 邻域类型
//!
//! 某一时刻为某个中心节点派生出的邻居集合，计算后不可变。

use crate::env::NodeId;
use std::collections::HashSet;

/// 中心节点的邻域（无序，按标识去重）。
///
/// 不变量：`center` 永远不在成员集合中。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    center: NodeId,
    members: HashSet<NodeId>,
}

impl Neighborhood {
    /// 由成员集合构建邻域；若集合含 `center` 则剔除之。
    pub fn new(center: NodeId, mut members: HashSet<NodeId>) -> Neighborhood {
        members.remove(&center);
        Neighborhood { center, members }
    }

    /// 邻域所属的中心节点
    pub fn center(&self) -> NodeId {
        self.center
    }

    /// 是否包含指定节点
    pub fn contains(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    /// 邻居数量
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// 邻域是否为空
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// 遍历邻居
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members.iter().copied()
    }

    /// 以集合形式访问成员
    pub fn members(&self) -> &HashSet<NodeId> {
        &self.members
    }
}
