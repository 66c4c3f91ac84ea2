mod checkout_branch_removes_missing_files;
mod checkout_invalid_target_changes_nothing;
