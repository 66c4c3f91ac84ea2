mod add_single_file_to_index;
mod add_all_replaces_index_with_snapshot;
mod adding_a_missing_file_fails;
