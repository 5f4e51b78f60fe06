//! 内容区消息
//!
//! 主页：列表选择、搜索输入、地区筛选
//! 详情页：邻国徽章选择、打开链接

/// 内容区消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（打开国家、邻国或 Home 链接）
    Confirm,

    // ========== 搜索 ==========
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 清空搜索
    ClearQuery,
    /// 切换地区筛选
    CycleRegion,

    // ========== 邻国徽章 ==========
    /// 上一个徽章
    PrevBorder,
    /// 下一个徽章
    NextBorder,
}
