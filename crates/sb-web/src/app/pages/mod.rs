pub mod accounts;
pub mod admin;
pub mod customers;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod transactions;

pub use accounts::AccountsPage;
pub use admin::AdminPage;
pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
pub use transactions::TransactionsPage;
