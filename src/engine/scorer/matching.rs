use crate::config::ScoringConfig;
use crate::domain::product::Product;
use std::collections::HashMap;

// ==========================================
// ProductTally - 产品匹配计数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductTally {
    /// 参考产品数量
    pub expected: usize,
    /// 基础类型匹配数
    pub type_matches: usize,
    /// 完整类型 (含颜色) 匹配数
    pub color_matches: usize,
    /// 位姿在容差内的匹配数
    pub pose_matches: usize,
}

impl ProductTally {
    /// 所有参考产品都以正确类型和位姿匹配
    pub fn is_complete(&self) -> bool {
        self.pose_matches == self.expected
    }
}

/// 统计提交产品与参考产品的匹配情况
///
/// 类型存在不看缺陷标记; 颜色、位姿与完成只认非缺陷产品
pub(super) fn tally_products(
    expected: &[Product],
    submitted: &[Product],
    config: &ScoringConfig,
) -> ProductTally {
    let colors = config.colors.as_slice();
    let candidates: Vec<&Product> = submitted.iter().filter(|p| !p.is_faulty).collect();

    let type_matches = multiset_overlap(
        expected.iter().map(|p| p.base_type(colors)),
        submitted.iter().map(|p| p.base_type(colors)),
    );
    let color_matches = multiset_overlap(
        expected.iter().map(|p| p.product_type.as_str()),
        candidates.iter().map(|p| p.product_type.as_str()),
    );
    let pose_matches = count_pose_matches(expected, &candidates, config);

    ProductTally {
        expected: expected.len(),
        type_matches,
        color_matches,
        pose_matches,
    }
}

/// 两个多重集合的交集大小
fn multiset_overlap<'a>(
    expected: impl Iterator<Item = &'a str>,
    submitted: impl Iterator<Item = &'a str>,
) -> usize {
    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for key in submitted {
        *remaining.entry(key).or_insert(0) += 1;
    }

    let mut overlap = 0;
    for key in expected {
        if let Some(count) = remaining.get_mut(key) {
            if *count > 0 {
                *count -= 1;
                overlap += 1;
            }
        }
    }
    overlap
}

/// 位姿匹配: 收集所有同类型且在容差内的 (参考, 提交) 对, 全局按位置误差从小到大贪心分配
///
/// 每个参考位置、每个提交产品最多使用一次; 误差相同时按下标先后
fn count_pose_matches(expected: &[Product], candidates: &[&Product], config: &ScoringConfig) -> usize {
    let mut pairs: Vec<(f64, usize, usize)> = Vec::new();
    for (ei, target) in expected.iter().enumerate() {
        for (ci, candidate) in candidates.iter().enumerate() {
            if candidate.product_type != target.product_type {
                continue;
            }
            let distance = candidate.pose.position_distance(&target.pose);
            let angle = candidate.pose.orientation_error(&target.pose);
            if distance <= config.position_tolerance && angle <= config.orientation_tolerance {
                pairs.push((distance, ei, ci));
            }
        }
    }

    pairs.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    let mut expected_used = vec![false; expected.len()];
    let mut candidate_used = vec![false; candidates.len()];
    let mut matches = 0;
    for (_, ei, ci) in pairs {
        if expected_used[ei] || candidate_used[ci] {
            continue;
        }
        expected_used[ei] = true;
        candidate_used[ci] = true;
        matches += 1;
    }
    matches
}
