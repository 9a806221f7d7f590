pub mod audit_logs;
pub mod order_items;
pub mod orders;
pub mod plants;
pub mod users;

pub use audit_logs::Entity as AuditLogs;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use plants::Entity as Plants;
pub use users::Entity as Users;
