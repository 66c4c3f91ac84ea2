mod create_branch_errors;
mod list_branches_marks_current;
