mod merge_same_commit;
mod merge_errors;
