mod home;
mod login;
mod member_detail;
mod members;
mod shell;
mod visitor_detail;
mod visitors;

pub use home::Home;
pub use login::Login;
pub use member_detail::MemberDetail;
pub use members::Members;
pub use shell::Shell;
pub use visitor_detail::VisitorDetail;
pub use visitors::Visitors;
