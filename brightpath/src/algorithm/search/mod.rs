mod bi_criteria_search;
mod frontier_item;
mod search_result;
mod termination_reason;

pub use bi_criteria_search::BiCriteriaSearch;
pub use frontier_item::FrontierItem;
pub use search_result::SearchResult;
pub use termination_reason::TerminationReason;
