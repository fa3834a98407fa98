//! 工具层：注册表与外部服务客户端（库存 / 订单 / 支付）

pub mod inventory_api;
pub mod order_api;
pub mod payment_api;
pub mod registry;

pub use inventory_api::{CatalogTool, InventoryApi};
pub use order_api::OrderApi;
pub use payment_api::{PaymentApi, PaymentSetupTool};
pub use registry::{Tool, ToolOutput, ToolRegistry};
