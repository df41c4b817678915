use log::debug;
use serde_json::Value;

use crate::subject::{ExistingGpa, Subject};

/// 校验未经类型化的课程数据是否符合 [`Subject`] 结构
///
/// `selected` 字段不参与校验，缺失或类型错误的字段一律返回 `false`，
/// 不做数值范围检查。
pub fn validate_subject_data(candidate: &Value) -> bool {
    candidate.get("id").map_or(false, Value::is_number)
        && candidate.get("name").map_or(false, Value::is_string)
        && candidate.get("credit").map_or(false, Value::is_number)
        && candidate.get("score").map_or(false, Value::is_number)
        && candidate.get("semester").map_or(false, Value::is_string)
}

/// 计算加权平均学分绩
///
/// # Arguments
///
/// * `subjects` - 课程记录，仅 `selected == true` 的记录参与计算
/// * `existing` - 历史基线，`credits > 0` 时并入计算
///
/// # Returns
///
/// 保留两位小数的字符串，总学分为 0 时返回 `"0.00"`
pub fn calculate_weighted_average(subjects: &[Subject], existing: Option<&ExistingGpa>) -> String {
    let selected = subjects.iter().filter(|subject| subject.selected);
    let (current_weighted_score, current_credits) = selected
        .fold((0.0, 0.0), |(weighted, credits), subject| {
            (
                weighted + subject.score * subject.credit,
                credits + subject.credit,
            )
        });

    debug!(
        "weighted average over {} credits, baseline: {}",
        current_credits,
        existing.is_some()
    );

    if let Some(gpa) = existing.filter(|gpa| gpa.credits > 0.0) {
        let total_weighted_score = current_weighted_score + gpa.score * gpa.credits;
        let total_credits = current_credits + gpa.credits;
        return if total_credits == 0.0 {
            "0.00".to_string()
        } else {
            format!("{:.2}", total_weighted_score / total_credits)
        };
    }

    if current_credits == 0.0 {
        "0.00".to_string()
    } else {
        format!("{:.2}", current_weighted_score / current_credits)
    }
}

/// 计算总学分
///
/// 与 [`calculate_weighted_average`] 不同，只要传入了基线，
/// 其 `credits` 就会被累加，不再检查是否大于 0。
pub fn calculate_total_credits(subjects: &[Subject], existing: Option<&ExistingGpa>) -> f64 {
    let current_credits: f64 = subjects
        .iter()
        .filter(|subject| subject.selected)
        .map(|subject| subject.credit)
        .sum();

    current_credits + existing.map_or(0.0, |gpa| gpa.credits)
}
