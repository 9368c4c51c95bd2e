mod dashboard;
mod survey;

pub use dashboard::Dashboard;
pub use survey::Survey;
