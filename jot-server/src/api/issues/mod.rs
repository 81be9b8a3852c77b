pub mod create_issues_request;
pub mod issue_list_response;
pub mod issues;
