mod detail;
mod list;

pub use detail::CaseDetail;
pub use list::CaseList;
