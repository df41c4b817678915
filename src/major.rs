use serde::Serialize;

/// 专业目录条目
///
/// 静态参考数据，`file` 指向该专业对应的课程数据文件（本库不负责加载）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Major {
    pub value: &'static str,
    pub label: &'static str,
    pub file: &'static str,
}

/// 专业目录
pub const MAJORS: &[Major] = &[
    Major {
        value: "txgc",
        label: "通信工程",
        file: "txgc.json",
    },
    Major {
        value: "jqrgc",
        label: "机器人工程",
        file: "jqrgc.json",
    },
    Major {
        value: "dzxx",
        label: "电子信息工程",
        file: "dzxx.json",
    },
    Major {
        value: "dxzzs",
        label: "电子信息工程实验班",
        file: "dzxxs.json",
    },
    Major {
        value: "cs",
        label: "计算机科学与技术、计算机科学与技术实验班",
        file: "cs.json",
    },
    Major {
        value: "se",
        label: "软件工程",
        file: "se.json",
    },
    Major {
        value: "bxk",
        label: "全校必修课",
        file: "bxk.json",
    },
    // 可以继续添加其他专业
];
