// ==========================================
// ARIAC 评分引擎 - 实体名称解析
// ==========================================
// 职责: 由仿真实体实例名推导 去命名空间名 / 逻辑类型 / 实例 ID
// 约定: 层级名以 '|' 分隔; 多实例以 "_<数字>" 结尾; 克隆模型以 "_clone" 结尾
// 红线: 输入来自不受控的仿真运行时, 任何输入都不得 panic
// ==========================================

const NAMESPACE_SEPARATOR: char = '|';
const CLONE_SUFFIX: &str = "_clone";

/// 去掉命名空间, 返回最后一个 '|' 之后的部分
///
/// 没有分隔符时返回整个字符串; 以 '|' 结尾时返回空串
pub fn trim_namespace(name: &str) -> &str {
    match name.rfind(NAMESPACE_SEPARATOR) {
        Some(index) => &name[index + 1..],
        None => name,
    }
}

/// 查找实例后缀 "_<数字>" 中下划线的位置
///
/// 规则:
/// - 从尾部跳过连续数字, 取最后一个非数字字符
/// - 该字符必须是 '_' 且下标 > 1 才视为实例后缀
/// - 全数字或空串没有非数字字符, 不视为后缀
fn instance_suffix_index(name: &str) -> Option<usize> {
    let index = name.rfind(|c: char| !c.is_ascii_digit())?;
    if name.as_bytes()[index] == b'_' && index > 1 {
        Some(index)
    } else {
        None
    }
}

/// 由实体名推导逻辑类型
///
/// 例: `"world|gear_part_3"` → `"gear_part"`, `"robot|pulley_part_clone"` → `"pulley_part"`
pub fn determine_model_type(name: &str) -> String {
    let mut model_type = trim_namespace(name);

    // 去掉多实例后缀
    if let Some(index) = instance_suffix_index(model_type) {
        model_type = &model_type[..index];
    }

    // 去掉克隆后缀
    if let Some(stripped) = model_type.strip_suffix(CLONE_SUFFIX) {
        model_type = stripped;
    }

    model_type.to_string()
}

/// 由实体名推导实例 ID
///
/// 有实例后缀时只返回数字部分; 没有时返回完整的去命名空间名
pub fn determine_model_id(name: &str) -> String {
    let model_id = trim_namespace(name);

    match instance_suffix_index(model_id) {
        Some(index) => model_id[index + 1..].to_string(),
        None => model_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_namespace() {
        assert_eq!(trim_namespace("world|robot|gear_part_1"), "gear_part_1");
        assert_eq!(trim_namespace("gear_part_1"), "gear_part_1");
        assert_eq!(trim_namespace(""), "");
        assert_eq!(trim_namespace("world|"), "");
        assert_eq!(trim_namespace("|"), "");
    }

    #[test]
    fn test_model_type_strips_instance_suffix() {
        assert_eq!(determine_model_type("world|gear_part_3"), "gear_part");
        assert_eq!(determine_model_type("gear_part_1"), "gear_part");
        assert_eq!(determine_model_type("assembly_battery_red_12"), "assembly_battery_red");
    }

    #[test]
    fn test_model_type_strips_clone_suffix() {
        assert_eq!(determine_model_type("robot|pulley_part_clone"), "pulley_part");
        assert_eq!(determine_model_type("pulley_part_clone_4"), "pulley_part");
        assert_eq!(determine_model_type("gear_part_clone"), "gear_part");
    }

    #[test]
    fn test_model_type_without_suffix_is_unchanged() {
        assert_eq!(determine_model_type("world|gear_part"), "gear_part");
        assert_eq!(determine_model_type("piston_rod_part"), "piston_rod_part");
        // 数字前不是下划线, 不剥离
        assert_eq!(determine_model_type("agv2"), "agv2");
    }

    #[test]
    fn test_model_type_short_prefix_is_kept() {
        // 下划线下标 <= 1 时不剥离
        assert_eq!(determine_model_type("a_1"), "a_1");
        assert_eq!(determine_model_type("_5"), "_5");
        assert_eq!(determine_model_type("ab_1"), "ab");
    }

    #[test]
    fn test_model_type_degrades_on_malformed_names() {
        assert_eq!(determine_model_type(""), "");
        assert_eq!(determine_model_type("world|"), "");
        assert_eq!(determine_model_type("12345"), "12345");
        assert_eq!(determine_model_type("|||"), "");
        // 空数字串同样视为实例后缀
        assert_eq!(determine_model_type("gear_"), "gear");
    }

    #[test]
    fn test_model_id_returns_digit_suffix() {
        assert_eq!(determine_model_id("world|gear_part_3"), "3");
        assert_eq!(determine_model_id("assembly_pump_blue_17"), "17");
        assert_eq!(determine_model_id("pulley_part_clone_2"), "2");
    }

    #[test]
    fn test_model_id_without_suffix_returns_trimmed_name() {
        // 单实例以完整名称作为 ID
        assert_eq!(determine_model_id("world|gear_part"), "gear_part");
        assert_eq!(determine_model_id("robot|pulley_part_clone"), "pulley_part_clone");
        assert_eq!(determine_model_id("a_1"), "a_1");
        assert_eq!(determine_model_id(""), "");
    }

    #[test]
    fn test_resolution_is_stable_across_clones() {
        let names = ["w|gear_part_1", "w|gear_part_2", "w|gear_part_clone_30"];
        for name in names {
            assert_eq!(determine_model_type(name), "gear_part");
        }
        let ids: Vec<String> = names.iter().map(|n| determine_model_id(n)).collect();
        assert_eq!(ids, vec!["1", "2", "30"]);
    }
}
