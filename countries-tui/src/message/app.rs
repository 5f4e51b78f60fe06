//! 应用主消息枚举

use countries_core::CountryRecord;

use super::{ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 内容区相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 详情页的返回按钮
    GoBack,

    /// 重新加载国家集合
    Refresh,

    /// 集合加载完成
    CountriesLoaded(Vec<CountryRecord>),

    /// 集合加载失败
    LoadFailed(String),

    /// 显示帮助
    ShowHelp,

    /// 切换界面语言
    CycleLanguage,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
