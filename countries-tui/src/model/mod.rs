//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod page;           // 页面标识（由当前路由得出）
//!         mod router;         // 历史路由（实现 countries_core::Navigator）
//!
//!         pub mod state;      // 页面数据状态
//!
//!     page.rs 与 state/ 的区别：
//!         - Page 只标识当前位于哪个页面，相当于门牌号；
//!         - State 存储页面的数据（搜索词、选中项、详情页视图等），相当于房间的内容。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 路由与 “from” 标记
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     HistoryRouter 保存一个 Location 栈，每个 Location 带有 NavState { from }。
//!
//!         - 应用内跳转（列表 Enter、邻国徽章 Enter、未找到页的 Home 链接）
//!           都带 from = true；
//!         - 启动参数直接进入的详情页 from = false。
//!
//!     详情页的返回按钮调用 countries_core::go_back(intent, router)：
//!         from = true   → navigate_back()，弹出一层历史
//!         from = false  → navigate(Home, from = true)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 集合与 revision
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App.countries 为 None 表示集合仍在加载（详情页显示 Loading）。
//!     每次替换集合时 revision 递增，CountryPage 据此判断是否需要重新查找。
//!

mod app;
mod page;
mod router;
pub mod state;

pub use app::App;
pub use page::Page;
pub use router::HistoryRouter;
pub use state::{DetailState, HomeState, Modal, ModalState};
