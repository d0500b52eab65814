pub mod guarded;
pub mod layout;
pub mod modal;
pub mod shell;
pub mod stat_card;
pub mod table;
pub mod toast;

pub use guarded::Guarded;
pub use layout::Layout;
pub use modal::Modal;
pub use shell::Shell;
pub use stat_card::StatCard;
pub use table::DataTable;
pub use toast::{Toast, ToastMessage, ToastType};
