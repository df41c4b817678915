use serde::{Deserialize, Serialize};

/// 一条课程记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    // 课程id，唯一性由调用方保证
    pub id: i64,
    // 课程名称
    pub name: String,
    // 学分
    pub credit: f64,
    // 成绩
    pub score: f64,
    // 学期，如 "2024-1"
    pub semester: String,
    // 是否参与计算
    pub selected: bool,
}

/// 已结算的历史绩点基线
///
/// `credits` 为 0 时表示没有可用的基线。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExistingGpa {
    // 历史平均成绩
    pub score: f64,
    // 历史总学分
    pub credits: f64,
}

impl Subject {
    pub fn new(
        id: i64,
        name: String,
        credit: f64,
        score: f64,
        semester: String,
        selected: bool,
    ) -> Self {
        Self {
            id,
            name,
            credit,
            score,
            semester,
            selected,
        }
    }
}

impl ExistingGpa {
    pub fn new(score: f64, credits: f64) -> Self {
        Self { score, credits }
    }
}
